//! Curator controller
//!
//! Owns the editor buffer and wires user actions to the [`PromptStore`],
//! the text transformations, the template catalog and the Playground.
//! Every action reports its outcome through the notification queue.
//!
//! The optimize flow is a two-step review: [`CuratorController::apply_optimize`]
//! rewrites the buffer and keeps the original text in a pending
//! [`OptimizationReview`]; the user then either continues
//! ([`accept_review`](CuratorController::accept_review)) or reverts
//! ([`revert_review`](CuratorController::revert_review)).

use std::collections::VecDeque;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CuratorConfig;
use crate::db::prompts::{Category, Prompt, PromptDraft};
use crate::db::PromptStore;
use crate::errors::Result;
use crate::notifications::{Notification, NotificationQueue};
use crate::playground::{
    PlaygroundRequest, PlaygroundResult, PlaygroundSettings, Provider, ResponseProvider,
    SimulatedProvider,
};
use crate::templates::{Template, TemplateLibrary};
use crate::transform::{self, OptimizationChange};

/// Metadata entered next to the editor when saving
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    #[serde(default)]
    pub title:    Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub tags_raw: String,
}

/// Text captured before an optimization, with the change log to review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationReview {
    pub original: String,
    pub changes:  Vec<OptimizationChange>,
}

/// Result of [`CuratorController::apply_optimize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeOutcome {
    /// The buffer already had the scaffold; nothing changed
    AlreadyOptimized,
    /// The buffer was rewritten; these changes await review
    Review(Vec<OptimizationChange>),
}

pub struct CuratorController {
    store:         PromptStore,
    store_path:    Option<PathBuf>,
    templates:     TemplateLibrary,
    responder:     Box<dyn ResponseProvider>,
    notifications: NotificationQueue,
    buffer:        String,
    review:        Option<OptimizationReview>,
    history:       VecDeque<PlaygroundResult>,
    history_limit: usize,
}

impl CuratorController {
    /// In-memory controller over `store`
    pub fn new(store: PromptStore, responder: Box<dyn ResponseProvider>) -> Self {
        Self {
            store,
            store_path: None,
            templates: TemplateLibrary,
            responder,
            notifications: NotificationQueue::default(),
            buffer: String::new(),
            review: None,
            history: VecDeque::new(),
            history_limit: CuratorConfig::default().history_limit,
        }
    }

    /// Controller set up from `config`, loading the persisted store when
    /// persistence is enabled
    pub fn from_config(config: &CuratorConfig) -> Result<Self> {
        let responder = Box::new(SimulatedProvider::new(config.playground_delay));

        let mut controller = if config.persist {
            let path = config.store_path();
            let store = PromptStore::open(&path)?;
            let mut controller = Self::new(store, responder);
            controller.store_path = Some(path);
            controller
        } else {
            Self::new(PromptStore::new(), responder)
        };
        controller.history_limit = config.history_limit;

        Ok(controller)
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    // ========================================================================
    // Editor buffer
    // ========================================================================

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Start a fresh prompt: empty buffer, no pending review
    pub fn new_prompt(&mut self) {
        self.buffer.clear();
        self.review = None;
        debug!("new prompt");
    }

    /// Run [`transform::format`] over the buffer
    pub fn apply_format(&mut self) -> &str {
        self.buffer = transform::format(&self.buffer);
        self.notifications
            .push(Notification::success("Formatted", "Prompt layout normalized"));
        &self.buffer
    }

    /// Run [`transform::optimize`] over the buffer
    ///
    /// On a rewrite the original text is kept in a pending review until it
    /// is accepted or reverted.
    pub fn apply_optimize(&mut self) -> OptimizeOutcome {
        let (optimized, changes) = transform::optimize(&self.buffer);

        if changes.is_empty() {
            self.notifications.push(Notification::info(
                "Already optimized",
                "This prompt already has Context and Task sections",
            ));
            return OptimizeOutcome::AlreadyOptimized;
        }

        debug!(changes = changes.len(), "optimized prompt");
        let original = std::mem::replace(&mut self.buffer, optimized);
        self.review = Some(OptimizationReview {
            original,
            changes: changes.clone(),
        });
        OptimizeOutcome::Review(changes)
    }

    pub fn pending_review(&self) -> Option<&OptimizationReview> {
        self.review.as_ref()
    }

    /// Keep the optimized text and drop the change log
    pub fn accept_review(&mut self) -> bool {
        if self.review.take().is_none() {
            return false;
        }
        self.notifications
            .push(Notification::success("Optimized", "Optimized prompt kept"));
        true
    }

    /// Restore the text captured before the pending optimization
    pub fn revert_review(&mut self) -> bool {
        match self.review.take() {
            Some(review) => {
                self.revert(review.original);
                true
            },
            None => false,
        }
    }

    /// Replace the buffer with a previously captured text
    pub fn revert(&mut self, original: impl Into<String>) {
        self.buffer = original.into();
        self.review = None;
        self.notifications
            .push(Notification::info("Reverted", "Original prompt restored"));
    }

    // ========================================================================
    // Saved prompts
    // ========================================================================

    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    /// Save the buffer as a new prompt
    ///
    /// Empty content is rejected with a `ValidationError`; the buffer and
    /// the store are left as they were.
    pub fn save_current(&mut self, metadata: PromptMetadata) -> Result<Prompt> {
        let draft = PromptDraft {
            title:    metadata.title,
            content:  self.buffer.clone(),
            category: metadata.category,
            tags_raw: metadata.tags_raw,
        };

        let result = self.mutate(|store| store.save(draft));
        match &result {
            Ok(prompt) => self.notifications.push(Notification::success(
                "Saved",
                format!("\"{}\" added to your library", prompt.title),
            )),
            Err(err) => self.notifications.push(Notification::error(err)),
        }
        result
    }

    /// Copy a saved prompt into the buffer; unknown ids are ignored
    pub fn load(&mut self, id: &str) -> Option<Prompt> {
        let prompt = self.store.get(id)?.clone();
        self.buffer = prompt.content.clone();
        self.review = None;
        self.notifications.push(Notification::success(
            "Loaded",
            format!("\"{}\" loaded into the editor", prompt.title),
        ));
        Some(prompt)
    }

    /// Delete a saved prompt; unknown ids are ignored
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.store.get(id).is_none() {
            return Ok(false);
        }

        let result = self.mutate(|store| Ok(store.delete(id)));
        match &result {
            Ok(_) => self
                .notifications
                .push(Notification::success("Deleted", "Prompt removed")),
            Err(err) => self.notifications.push(Notification::error(err)),
        }
        result
    }

    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Prompt> + Clone + 'a {
        self.store.search(term)
    }

    /// Export every saved prompt in the portable format
    pub fn export(&mut self) -> Result<String> {
        let result = self.store.export();
        match &result {
            Ok(_) => self.notifications.push(Notification::success(
                "Exported",
                format!("{} prompts exported", self.store.len()),
            )),
            Err(err) => self.notifications.push(Notification::error(err)),
        }
        result
    }

    /// Import prompts from an export payload, all or nothing
    pub fn import(&mut self, data: &str) -> Result<usize> {
        let result = self.mutate(|store| store.import(data));
        match &result {
            Ok(count) => self.notifications.push(Notification::success(
                "Imported",
                format!("{} prompts imported", count),
            )),
            Err(err) => self.notifications.push(Notification::error(err)),
        }
        result
    }

    /// Apply a store mutation and mirror it to disk
    ///
    /// If writing the file fails the in-memory store is rolled back, so
    /// memory and disk never disagree.
    fn mutate<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut PromptStore) -> Result<T>,
    {
        let Some(path) = self.store_path.as_deref() else {
            return op(&mut self.store);
        };

        let snapshot = self.store.clone();
        let value = op(&mut self.store)?;
        if let Err(err) = self.store.persist(path) {
            warn!(path = %path.display(), error = %err, "persist failed, rolling back");
            self.store = snapshot;
            return Err(err);
        }
        Ok(value)
    }

    // ========================================================================
    // Templates
    // ========================================================================

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    /// Seed the buffer with a template body; unknown ids are ignored
    pub fn use_template(&mut self, id: &str) -> Option<&'static Template> {
        let template = self.templates.get(id)?;
        self.buffer = self.templates.use_template(template);
        self.review = None;
        self.notifications.push(Notification::success(
            "Template loaded",
            format!("\"{}\" copied into the editor", template.name),
        ));
        Some(template)
    }

    // ========================================================================
    // Playground
    // ========================================================================

    /// Send the buffer to `provider` and record the answer
    ///
    /// Unset `settings` fall back to the provider's first model and the
    /// default sampling settings. Results are kept newest first, up to the
    /// configured history limit.
    pub fn run_playground(&mut self, provider: Provider, settings: PlaygroundSettings) -> Result<PlaygroundResult> {
        let request = PlaygroundRequest::new(provider, self.buffer.clone()).with_settings(settings);
        debug!(
            provider = %provider,
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            system_prompt = request.system_prompt.is_some(),
            "running playground"
        );

        let result = request
            .validate()
            .and_then(|()| self.responder.respond(&request))
            .map(|response| PlaygroundResult {
                provider: provider.name().to_string(),
                model: request.model.clone(),
                response,
            });

        match &result {
            Ok(answer) => {
                self.history.push_front(answer.clone());
                self.history.truncate(self.history_limit);
                self.notifications
                    .push(Notification::success("Success", "Prompt executed successfully"));
            },
            Err(err) => {
                warn!(provider = %provider, error = %err, "playground run failed");
                self.notifications.push(Notification::error(err));
            },
        }
        result
    }

    pub fn playground_history(&self) -> impl Iterator<Item = &PlaygroundResult> {
        self.history.iter()
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
