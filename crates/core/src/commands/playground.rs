use serde_json::{json, Value};

use super::{str_arg, typed_args};
use crate::controller::CuratorController;
use crate::errors::Result;
use crate::playground::{PlaygroundSettings, Provider};

/// Providers with their display names and models
pub fn providers(_c: &mut CuratorController, _args: Value) -> Result<Value> {
    let providers: Vec<_> = Provider::ALL
        .iter()
        .map(|p| {
            json!({
                "key": p.key(),
                "name": p.name(),
                "models": p.models(),
            })
        })
        .collect();
    Ok(json!({ "providers": providers }))
}

/// Run the editor buffer against
/// `{provider, model?, temperature?, maxTokens?, systemPrompt?}`
pub fn run(c: &mut CuratorController, args: Value) -> Result<Value> {
    let provider: Provider = str_arg("playground.run", &args, "provider")?.parse()?;
    let settings: PlaygroundSettings = typed_args("playground.run", args)?;
    let result = c.run_playground(provider, settings)?;
    Ok(json!(result))
}

pub fn history(c: &mut CuratorController, _args: Value) -> Result<Value> {
    let results: Vec<_> = c.playground_history().collect();
    Ok(json!({ "results": results }))
}
