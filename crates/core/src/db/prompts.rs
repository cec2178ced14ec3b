use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CuratorError, Result};

/// Fixed set of prompt categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Analysis,
    Creative,
    Technical,
    Business,
    Educational,
    Research,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Analysis,
        Category::Creative,
        Category::Technical,
        Category::Business,
        Category::Educational,
        Category::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Analysis => "analysis",
            Category::Creative => "creative",
            Category::Technical => "technical",
            Category::Business => "business",
            Category::Educational => "educational",
            Category::Research => "research",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CuratorError::ValidationError(format!("unknown category '{}'", s)))
    }
}

/// A saved prompt
///
/// Serialized field-for-field as the export format, with camelCase keys and
/// RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id:         String,
    pub title:      String,
    pub content:    String,
    pub category:   Category,
    pub tags:       Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User input for a new prompt, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title:    Option<String>,
    pub content:  String,
    pub category: Category,
    pub tags_raw: String,
}

impl PromptDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags_raw: impl Into<String>) -> Self {
        self.tags_raw = tags_raw.into();
        self
    }
}

/// Split a comma-separated tag field, trimming entries and dropping empty ones
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Build a prompt from a draft
///
/// `position` is the 1-based number used for the default title.
pub(crate) fn build_prompt(draft: PromptDraft, position: usize) -> Result<Prompt> {
    if draft.content.trim().is_empty() {
        return Err(CuratorError::ValidationError("empty content".to_string()));
    }

    let title = draft
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Prompt {}", position));
    let now = Utc::now();

    Ok(Prompt {
        id: Uuid::new_v4().to_string(),
        title,
        content: draft.content,
        category: draft.category,
        tags: parse_tags(&draft.tags_raw),
        created_at: now,
        updated_at: now,
    })
}

impl Prompt {
    /// Case-insensitive substring match on title, content or any tag
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
