use serde_json::{json, Value};

use super::{opt_str_arg, str_arg, typed_args};
use crate::controller::{CuratorController, PromptMetadata};
use crate::errors::Result;

pub fn new(c: &mut CuratorController, _args: Value) -> Result<Value> {
    c.new_prompt();
    Ok(json!({ "buffer": c.buffer() }))
}

/// Save the editor buffer with `{title?, category?, tagsRaw?}`
pub fn save(c: &mut CuratorController, args: Value) -> Result<Value> {
    let metadata: PromptMetadata = typed_args("prompts.save", args)?;
    let prompt = c.save_current(metadata)?;
    Ok(json!(prompt))
}

pub fn delete(c: &mut CuratorController, args: Value) -> Result<Value> {
    let id = str_arg("prompts.delete", &args, "id")?;
    let deleted = c.delete(id)?;
    Ok(json!({ "success": true, "deleted": deleted }))
}

pub fn load(c: &mut CuratorController, args: Value) -> Result<Value> {
    let id = str_arg("prompts.load", &args, "id")?;
    let prompt = c.load(id);
    Ok(json!({ "prompt": prompt, "buffer": c.buffer() }))
}

pub fn list(c: &mut CuratorController, _args: Value) -> Result<Value> {
    let prompts: Vec<_> = c.store().list().collect();
    Ok(json!({ "prompts": prompts }))
}

pub fn search(c: &mut CuratorController, args: Value) -> Result<Value> {
    let term = opt_str_arg("prompts.search", &args, "term")?.unwrap_or("");
    let prompts: Vec<_> = c.search(term).collect();
    Ok(json!({ "prompts": prompts }))
}

pub fn export(c: &mut CuratorController, _args: Value) -> Result<Value> {
    let data = c.export()?;
    Ok(json!({ "data": data, "count": c.store().len() }))
}

pub fn import(c: &mut CuratorController, args: Value) -> Result<Value> {
    let data = str_arg("prompts.import", &args, "data")?;
    let imported = c.import(data)?;
    Ok(json!({ "success": true, "imported": imported }))
}
