use serde_json::{json, Value};

use super::{opt_str_arg, str_arg};
use crate::controller::CuratorController;
use crate::db::prompts::Category;
use crate::errors::{CuratorError, Result};

/// List templates, optionally narrowed to `{category}`
pub fn list(c: &mut CuratorController, args: Value) -> Result<Value> {
    let templates: Vec<_> = match opt_str_arg("templates.list", &args, "category")? {
        Some(raw) => {
            let category: Category = raw.parse()?;
            c.templates().by_category(category).collect()
        },
        None => c.templates().list_all().iter().collect(),
    };
    Ok(json!({ "templates": templates }))
}

/// Seed the editor with the template `{id}`
pub fn use_template(c: &mut CuratorController, args: Value) -> Result<Value> {
    let id = str_arg("templates.use", &args, "id")?;
    let template = c
        .use_template(id)
        .ok_or_else(|| CuratorError::NotFound(format!("template '{}'", id)))?;
    Ok(json!({ "template": template, "buffer": c.buffer() }))
}
