//! Transient user notifications ("toasts")
//!
//! Every user action reports its outcome as a [`Notification`]. The
//! controller queues them and the UI drains the queue after each action.

use serde::Serialize;

use crate::errors::CuratorError;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Error,
}

/// A dismissible message shown after a user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level:       Level,
    pub title:       String,
    pub description: String,
}

impl Notification {
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            level:       Level::Success,
            title:       title.to_string(),
            description: description.into(),
        }
    }

    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            level:       Level::Info,
            title:       title.to_string(),
            description: description.into(),
        }
    }

    /// Error toast carrying the error's user-facing message
    pub fn error(err: &CuratorError) -> Self {
        Self {
            level:       Level::Error,
            title:       "Error".to_string(),
            description: err.user_message(),
        }
    }
}

/// FIFO queue of pending notifications
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Take every pending notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_uses_user_message() {
        let err = CuratorError::ValidationError("empty content".into());
        let note = Notification::error(&err);
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.description, err.user_message());
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::success("Saved", "one"));
        queue.push(Notification::info("Heads up", "two"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].description, "one");
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_serializes_level_lowercase() {
        let json = serde_json::to_value(Notification::success("Saved", "x")).unwrap();
        assert_eq!(json["level"], "success");
    }
}
