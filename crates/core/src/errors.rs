//! Error types for prompt-curator
//!
//! Every error in the curator is recoverable. The variants carry enough
//! context to be rendered as a dismissible toast via [`CuratorError::user_message`]
//! and grouped for logging via [`CuratorError::category`].

use thiserror::Error;

/// Result type alias for curator operations
pub type Result<T> = std::result::Result<T, CuratorError>;

/// Main error type for prompt-curator
#[derive(Debug, Error)]
pub enum CuratorError {
    /// A draft or request failed validation (e.g. empty content)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An import payload did not match the export schema
    #[error("Import error: {0}")]
    ImportError(String),

    /// A referenced item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Command not found in registry
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid command arguments
    #[error("Invalid arguments for command '{command}': {reason}")]
    InvalidArgs { command: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CuratorError {
    fn from(err: anyhow::Error) -> Self {
        CuratorError::Other(format!("{:#}", err))
    }
}

impl From<String> for CuratorError {
    fn from(err: String) -> Self {
        CuratorError::Other(err)
    }
}

impl From<&str> for CuratorError {
    fn from(err: &str) -> Self {
        CuratorError::Other(err.to_string())
    }
}

impl CuratorError {
    /// Get user-friendly error message for a toast
    pub fn user_message(&self) -> String {
        match self {
            CuratorError::ValidationError(reason) => {
                format!("Cannot save: {}", reason)
            },
            CuratorError::ImportError(reason) => {
                format!("Import failed: {}. Your prompts were not changed.", reason)
            },
            CuratorError::CommandNotFound(cmd) => {
                format!(
                    "Command '{}' not found. Use list_commands() for available commands.",
                    cmd
                )
            },
            CuratorError::InvalidArgs { command, reason } => {
                format!("Invalid arguments for '{}': {}", command, reason)
            },
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CuratorError::ValidationError(_) => "validation",
            CuratorError::ImportError(_) => "import",
            CuratorError::NotFound(_) => "not_found",
            CuratorError::CommandNotFound(_) => "command",
            CuratorError::InvalidArgs { .. } => "arguments",
            CuratorError::SerdeError(_) => "serialization",
            CuratorError::IoError(_) => "io",
            CuratorError::ConfigError(_) => "config",
            CuratorError::Other(_) => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CuratorError::ValidationError("empty content".to_string());
        assert_eq!(err.to_string(), "Validation error: empty content");
    }

    #[test]
    fn test_user_message() {
        let err = CuratorError::ImportError("expected a list of prompts".to_string());
        let msg = err.user_message();
        assert!(msg.contains("expected a list of prompts"));
        assert!(msg.contains("not changed"));

        let err = CuratorError::CommandNotFound("prompts.rename".to_string());
        assert!(err.user_message().contains("prompts.rename"));
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            CuratorError::ValidationError("x".to_string()).category(),
            "validation"
        );
        assert_eq!(CuratorError::ImportError("x".to_string()).category(), "import");
        assert_eq!(
            CuratorError::InvalidArgs {
                command: "test".to_string(),
                reason:  "bad".to_string(),
            }
            .category(),
            "arguments"
        );
    }

    #[test]
    fn test_from_string() {
        let err: CuratorError = "test error".into();
        assert_eq!(err.to_string(), "test error");
        assert_eq!(err.category(), "other");
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err: CuratorError = anyhow::anyhow!("inner").context("outer").into();
        assert_eq!(err.to_string(), "outer: inner");
    }
}
