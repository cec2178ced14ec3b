//! Command registry and dispatch system
//!
//! Every user-facing action (New, Save, Delete, Search, Load, Format,
//! Optimize, Revert, Export, Import, ...) is registered as
//! "category.action" (e.g. "prompts.save", "editor.optimize") and
//! dispatched to a handler that runs it against a [`CuratorController`].
//!
//! ## Adding a new command
//!
//! 1. Create handler function: `pub fn my_command(c: &mut CuratorController, args: Value) -> Result<Value>`
//! 2. Register in `REGISTRY`: `("category.action", my_command as CommandHandler)`
//! 3. Add tests for the command

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::controller::CuratorController;
use crate::errors::{CuratorError, Result};

pub mod editor;
pub mod playground;
pub mod prompts;
pub mod templates;

/// Type alias for command handler functions
///
/// Handlers take the controller and JSON arguments and return a JSON result.
pub type CommandHandler = fn(&mut CuratorController, Value) -> Result<Value>;

/// Static command registry
///
/// Maps command names to handler functions. Initialized lazily on first access.
static REGISTRY: Lazy<HashMap<&'static str, CommandHandler>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Saved prompts
    map.insert("prompts.new", prompts::new as CommandHandler);
    map.insert("prompts.save", prompts::save as CommandHandler);
    map.insert("prompts.delete", prompts::delete as CommandHandler);
    map.insert("prompts.load", prompts::load as CommandHandler);
    map.insert("prompts.list", prompts::list as CommandHandler);
    map.insert("prompts.search", prompts::search as CommandHandler);
    map.insert("prompts.export", prompts::export as CommandHandler);
    map.insert("prompts.import", prompts::import as CommandHandler);

    // Editor buffer
    map.insert("editor.get", editor::get as CommandHandler);
    map.insert("editor.set", editor::set as CommandHandler);
    map.insert("editor.format", editor::format as CommandHandler);
    map.insert("editor.optimize", editor::optimize as CommandHandler);
    map.insert("editor.accept", editor::accept as CommandHandler);
    map.insert("editor.revert", editor::revert as CommandHandler);

    // Templates
    map.insert("templates.list", templates::list as CommandHandler);
    map.insert("templates.use", templates::use_template as CommandHandler);

    // Playground
    map.insert("playground.providers", playground::providers as CommandHandler);
    map.insert("playground.run", playground::run as CommandHandler);
    map.insert("playground.history", playground::history as CommandHandler);

    // Toasts
    map.insert("notifications.drain", drain_notifications as CommandHandler);

    map
});

/// Dispatch a command by name
///
/// # Arguments
/// * `controller` - Curator the command acts on
/// * `command` - Command name (e.g., "prompts.save")
/// * `args` - Command arguments as JSON Value
///
/// # Returns
/// Command result as JSON Value, or error if command not found or failed
pub fn dispatch(controller: &mut CuratorController, command: &str, args: Value) -> Result<Value> {
    match REGISTRY.get(command) {
        Some(handler) => {
            tracing::debug!(command, "dispatching command");
            handler(controller, args)
        },
        None => Err(CuratorError::CommandNotFound(command.to_string())),
    }
}

/// Dispatch a command, turning errors into a structured error object
///
/// Error objects carry:
/// - `error`: true (marker that this is an error response)
/// - `message`: user-friendly error message
/// - `category`: error category for logging/handling
pub fn call(controller: &mut CuratorController, command: &str, args: Value) -> Value {
    match dispatch(controller, command, args) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(command, category = err.category(), error = %err, "command failed");
            json!({
                "error": true,
                "message": err.user_message(),
                "category": err.category(),
            })
        },
    }
}

/// List all available commands
///
/// Returns a sorted list of all registered command names.
pub fn list_commands() -> Vec<String> {
    let mut commands: Vec<String> = REGISTRY.keys().map(|&k| k.to_string()).collect();
    commands.sort();
    commands
}

/// Hand all pending toasts to the caller
fn drain_notifications(controller: &mut CuratorController, _args: Value) -> Result<Value> {
    Ok(json!({ "notifications": controller.drain_notifications() }))
}

// ============================================================================
// Argument helpers
// ============================================================================

/// Required string argument
pub(crate) fn str_arg<'a>(command: &str, args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CuratorError::InvalidArgs {
            command: command.to_string(),
            reason:  format!("missing string field '{}'", key),
        })
}

/// Optional string argument; present but not a string is an error
pub(crate) fn opt_str_arg<'a>(command: &str, args: &'a Value, key: &str) -> Result<Option<&'a str>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(CuratorError::InvalidArgs {
            command: command.to_string(),
            reason:  format!("field '{}' must be a string", key),
        }),
    }
}

/// Deserialize arguments into `T`, treating null as an empty object
pub(crate) fn typed_args<T: serde::de::DeserializeOwned>(command: &str, args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| CuratorError::InvalidArgs {
        command: command.to_string(),
        reason:  e.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn test_controller() -> CuratorController {
    use crate::{db::PromptStore, playground::SimulatedProvider};

    CuratorController::new(
        PromptStore::new(),
        Box::new(SimulatedProvider::new(std::time::Duration::ZERO)),
    )
}
