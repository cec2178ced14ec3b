use serde_json::{json, Value};

use super::{opt_str_arg, str_arg};
use crate::controller::{CuratorController, OptimizeOutcome};
use crate::errors::Result;

pub fn get(c: &mut CuratorController, _args: Value) -> Result<Value> {
    Ok(json!({
        "buffer": c.buffer(),
        "review": c.pending_review(),
    }))
}

pub fn set(c: &mut CuratorController, args: Value) -> Result<Value> {
    let text = str_arg("editor.set", &args, "text")?;
    c.set_buffer(text);
    Ok(json!({ "buffer": c.buffer() }))
}

pub fn format(c: &mut CuratorController, _args: Value) -> Result<Value> {
    let buffer = c.apply_format();
    Ok(json!({ "buffer": buffer }))
}

/// Optimize the buffer
///
/// Returns `{alreadyOptimized: true}` when nothing changed, otherwise the
/// new buffer and the change log awaiting `editor.accept` or `editor.revert`.
pub fn optimize(c: &mut CuratorController, _args: Value) -> Result<Value> {
    match c.apply_optimize() {
        OptimizeOutcome::AlreadyOptimized => Ok(json!({
            "alreadyOptimized": true,
            "buffer": c.buffer(),
        })),
        OptimizeOutcome::Review(changes) => Ok(json!({
            "alreadyOptimized": false,
            "buffer": c.buffer(),
            "changes": changes,
        })),
    }
}

/// Continue with the optimized text
pub fn accept(c: &mut CuratorController, _args: Value) -> Result<Value> {
    let accepted = c.accept_review();
    Ok(json!({ "accepted": accepted, "buffer": c.buffer() }))
}

/// Revert to `{original}` when given, otherwise to the pending review's original
pub fn revert(c: &mut CuratorController, args: Value) -> Result<Value> {
    let reverted = match opt_str_arg("editor.revert", &args, "original")? {
        Some(original) => {
            c.revert(original);
            true
        },
        None => c.revert_review(),
    };
    Ok(json!({ "reverted": reverted, "buffer": c.buffer() }))
}
