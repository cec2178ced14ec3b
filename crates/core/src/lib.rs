//! prompt-curator: the stateful core of a prompt-writing tutorial site
//!
//! The site itself is static content. This crate holds the part with real
//! behavior, the Prompt Curator:
//! - Prompt library (save, load, delete, search, export/import)
//! - Text transformations (format, optimize with a reviewable change log)
//! - Template catalog for seeding new prompts
//! - Playground with a pluggable (simulated) response provider
//!
//! ## Architecture
//!
//! - [`transform`] and [`templates`] are pure and stateless
//! - [`db::PromptStore`] owns the saved prompts, optionally mirrored to a JSON file
//! - [`controller::CuratorController`] owns the editor buffer and runs user actions
//! - [`commands`] exposes every action by name over JSON for the UI layer

// Module declarations
pub mod commands;
pub mod config;
pub mod controller;
pub mod db;
pub mod errors;
pub mod notifications;
pub mod playground;
pub mod runtime;
pub mod templates;
pub mod transform;

pub use config::CuratorConfig;
pub use controller::{CuratorController, OptimizeOutcome, PromptMetadata};
pub use db::prompts::{Category, Prompt, PromptDraft};
pub use db::PromptStore;
pub use errors::{CuratorError, Result};
