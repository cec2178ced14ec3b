//! Prompt storage
//!
//! [`PromptStore`] owns the saved prompts, newest first. It can be kept
//! purely in memory or mirrored to a JSON file in the export format.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::Result;

pub mod prompts;
pub mod schema;

use prompts::{build_prompt, Prompt, PromptDraft};

/// Ordered collection of saved prompts, newest first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromptStore {
    prompts: VecDeque<Prompt>,
    /// Prompts ever added (loaded, saved or imported); never decreases
    added:   usize,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store previously written with [`PromptStore::persist`]
    ///
    /// A missing file yields an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no store file, starting empty");
            return Ok(Self::new());
        }

        let data = fs::read_to_string(path)?;
        let prompts = schema::decode(&data)?;
        info!(path = %path.display(), count = prompts.len(), "loaded prompt store");
        Ok(Self {
            added:   prompts.len(),
            prompts: prompts.into(),
        })
    }

    /// Write the store to `path` in the export format
    ///
    /// The data goes to a sibling temp file first and is renamed over the
    /// target, so readers never see a partial file.
    pub fn persist(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = self.export()?;
        let tmp = path.with_extension("json.tmp");
        if let Err(err) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        debug!(path = %path.display(), count = self.len(), "persisted prompt store");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// All prompts, newest first
    pub fn list(&self) -> impl Iterator<Item = &Prompt> + Clone {
        self.prompts.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Validate `draft`, turn it into a prompt and insert it at the head
    ///
    /// Empty content fails with `ValidationError` and leaves the store as it was.
    /// An untitled draft is named after the number of prompts ever added, so
    /// deleting a prompt never makes the next default title repeat.
    pub fn save(&mut self, draft: PromptDraft) -> Result<Prompt> {
        let prompt = build_prompt(draft, self.added + 1)?;
        self.added += 1;
        self.prompts.push_front(prompt.clone());

        info!(id = %prompt.id, title = %prompt.title, category = %prompt.category, "saved prompt");
        Ok(prompt)
    }

    /// Remove the prompt with `id`
    ///
    /// Returns whether anything was removed; an unknown id is not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.prompts.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.prompts.remove(idx);
                info!(id, "deleted prompt");
                true
            },
            None => {
                debug!(id, "delete of unknown prompt ignored");
                false
            },
        }
    }

    /// Prompts whose title, content or a tag contains `term`, ignoring case
    ///
    /// An empty term matches everything. The iterator borrows the store and
    /// can be cloned to walk the results again.
    pub fn search(&self, term: &str) -> impl Iterator<Item = &Prompt> + Clone + '_ {
        let needle = term.to_lowercase();
        self.prompts.iter().filter(move |p| p.matches(&needle))
    }

    /// Serialize every prompt, newest first
    pub fn export(&self) -> Result<String> {
        schema::encode(&self.prompts)
    }

    /// Append the prompts in `data` after the existing ones
    ///
    /// All-or-nothing: a malformed payload fails with `ImportError` and the
    /// store is untouched. Imported ids are kept as they are.
    pub fn import(&mut self, data: &str) -> Result<usize> {
        let imported = schema::decode(data)?;
        let count = imported.len();
        self.prompts.extend(imported);
        self.added += count;

        info!(count, total = self.len(), "imported prompts");
        Ok(count)
    }
}
