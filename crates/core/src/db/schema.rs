//! Portable export/import format
//!
//! The file is a JSON array of prompt records:
//! ```json
//! [
//!   {
//!     "id": "0c6f...",
//!     "title": "Prompt 1",
//!     "content": "Write an essay",
//!     "category": "general",
//!     "tags": ["ai", "essay"],
//!     "createdAt": "2026-10-19T09:30:00Z",
//!     "updatedAt": "2026-10-19T09:30:00Z"
//!   }
//! ]
//! ```
//! Timestamps are optional on import and default to the import time.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::prompts::{Category, Prompt};
use crate::errors::{CuratorError, Result};

/// Fields every imported record must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "title", "content", "category", "tags"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    id:         String,
    title:      String,
    content:    String,
    category:   Category,
    tags:       Vec<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ImportRecord {
    fn into_prompt(self, now: DateTime<Utc>) -> Prompt {
        let created_at = self.created_at.unwrap_or(now);
        Prompt {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            tags: self.tags,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}

/// Serialize prompts in the export format
pub fn encode<'a>(prompts: impl IntoIterator<Item = &'a Prompt>) -> Result<String> {
    let records: Vec<&Prompt> = prompts.into_iter().collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse and validate an export payload
///
/// Either every record is valid and all of them are returned in file order,
/// or an [`CuratorError::ImportError`] describes the first problem.
pub fn decode(data: &str) -> Result<Vec<Prompt>> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| CuratorError::ImportError(format!("not valid JSON ({})", e)))?;

    let Value::Array(items) = value else {
        return Err(CuratorError::ImportError(
            "expected a list of prompts".to_string(),
        ));
    };

    let now = Utc::now();
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| decode_record(idx, item).map(|r| r.into_prompt(now)))
        .collect()
}

fn decode_record(idx: usize, item: Value) -> Result<ImportRecord> {
    let Some(fields) = item.as_object() else {
        return Err(CuratorError::ImportError(format!(
            "record {} is not an object",
            idx
        )));
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(CuratorError::ImportError(format!(
            "record {} is missing '{}'",
            idx, missing
        )));
    }

    serde_json::from_value(item)
        .map_err(|e| CuratorError::ImportError(format!("record {} is invalid: {}", idx, e)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> Value {
        json!({
            "id": "abc",
            "title": "T",
            "content": "C",
            "category": "technical",
            "tags": ["x"],
            "createdAt": "2024-05-01T12:00:00Z",
            "updatedAt": "2024-05-01T12:00:00Z"
        })
    }

    #[test]
    fn test_decode_valid() {
        let prompts = decode(&json!([record()]).to_string()).unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].id, "abc");
        assert_eq!(prompts[0].category, Category::Technical);
        assert_eq!(prompts[0].created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode(&record().to_string()).unwrap_err();
        assert!(matches!(err, CuratorError::ImportError(ref m) if m.contains("list")));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(CuratorError::ImportError(_))));
    }

    #[test]
    fn test_decode_reports_missing_field() {
        let mut broken = record();
        broken.as_object_mut().unwrap().remove("tags");
        let err = decode(&json!([record(), broken]).to_string()).unwrap_err();
        match err {
            CuratorError::ImportError(msg) => {
                assert!(msg.contains("record 1"));
                assert!(msg.contains("'tags'"));
            },
            other => panic!("Expected ImportError, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let mut broken = record();
        broken["tags"] = json!("x, y");
        assert!(matches!(
            decode(&json!([broken]).to_string()),
            Err(CuratorError::ImportError(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_category() {
        let mut broken = record();
        broken["category"] = json!("poetry");
        assert!(decode(&json!([broken]).to_string()).is_err());
    }

    #[test]
    fn test_missing_timestamps_default() {
        let mut bare = record();
        let obj = bare.as_object_mut().unwrap();
        obj.remove("createdAt");
        obj.remove("updatedAt");
        let prompts = decode(&json!([bare]).to_string()).unwrap();
        assert_eq!(prompts[0].created_at, prompts[0].updated_at);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(decode("[]").unwrap().is_empty());
    }
}
