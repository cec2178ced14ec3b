//! Playground: try a prompt against an AI provider
//!
//! No real provider is contacted. [`SimulatedProvider`] waits a fixed delay
//! and returns a canned answer. The controller only sees the
//! [`ResponseProvider`] trait, so tests can plug in a deterministic fake.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{CuratorError, Result};
use crate::runtime;

/// Providers offered in the Playground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Claude,
    OpenAi,
    Gemini,
    Perplexity,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Claude,
        Provider::OpenAi,
        Provider::Gemini,
        Provider::Perplexity,
    ];

    /// Stable key used in commands
    pub fn key(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
            Provider::Perplexity => "perplexity",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Claude => "Anthropic Claude",
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Google Gemini",
            Provider::Perplexity => "Perplexity AI",
        }
    }

    /// Models selectable for this provider; the first is the default
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Claude => &[
                "claude-3-opus-20240229",
                "claude-3-sonnet-20240229",
                "claude-3-haiku-20240307",
            ],
            Provider::OpenAi => &["gpt-4-turbo-preview", "gpt-4", "gpt-3.5-turbo"],
            Provider::Gemini => &["gemini-pro", "gemini-pro-vision", "gemini-ultra"],
            Provider::Perplexity => &[
                "llama-3.1-sonar-large-128k-online",
                "llama-3.1-sonar-small-128k-online",
            ],
        }
    }

    pub fn default_model(&self) -> &'static str {
        self.models()[0]
    }

    fn canned_response(&self) -> &'static str {
        match self {
            Provider::Claude => "Based on your prompt, I'll provide a thoughtful analysis. Claude's response would focus on being helpful, harmless, and honest while providing detailed reasoning for the given task.",
            Provider::OpenAi => "Here's my response to your request. GPT-4 would deliver a comprehensive answer that balances creativity with accuracy, following the specific instructions provided.",
            Provider::Gemini => "I'll address your prompt with Google's Gemini capabilities. The response would leverage multimodal understanding and provide structured, informative content.",
            Provider::Perplexity => "Using real-time search capabilities, here's what I found. Perplexity would provide current information with citations and sources to back up the response.",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Provider {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| CuratorError::ValidationError(format!("unknown provider '{}'", s)))
    }
}

/// Settings chosen next to the Playground editor; unset fields keep the
/// request defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundSettings {
    #[serde(default)]
    pub model:         Option<String>,
    #[serde(default)]
    pub temperature:   Option<f32>,
    #[serde(default)]
    pub max_tokens:    Option<u32>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Everything needed to run one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundRequest {
    pub provider:      Provider,
    pub model:         String,
    pub temperature:   f32,
    pub max_tokens:    u32,
    pub system_prompt: Option<String>,
    pub prompt:        String,
}

impl PlaygroundRequest {
    /// Request with the provider's default model and the Playground's
    /// default sampling settings
    pub fn new(provider: Provider, prompt: impl Into<String>) -> Self {
        Self {
            provider,
            model: provider.default_model().to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            system_prompt: None,
            prompt: prompt.into(),
        }
    }

    /// Override the defaults with whatever `settings` carries
    ///
    /// A blank system prompt counts as no system prompt.
    pub fn with_settings(mut self, settings: PlaygroundSettings) -> Self {
        if let Some(model) = settings.model {
            self.model = model;
        }
        if let Some(temperature) = settings.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = settings.max_tokens {
            self.max_tokens = max_tokens;
        }
        self.system_prompt = settings.system_prompt.filter(|s| !s.trim().is_empty());
        self
    }

    /// Check the model belongs to the provider and the sampling settings are sane
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(CuratorError::ValidationError(
                "Please enter a prompt to test".to_string(),
            ));
        }
        if !self.provider.models().contains(&self.model.as_str()) {
            return Err(CuratorError::ValidationError(format!(
                "model '{}' is not offered by {}",
                self.model,
                self.provider.name()
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CuratorError::ValidationError(
                "temperature must be between 0 and 2".to_string(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(CuratorError::ValidationError(
                "max tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One Playground answer, as shown in the results list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundResult {
    pub provider: String,
    pub model:    String,
    pub response: String,
}

/// Source of Playground answers
#[cfg_attr(test, mockall::automock)]
pub trait ResponseProvider {
    fn respond(&self, request: &PlaygroundRequest) -> Result<String>;
}

/// Stand-in provider: sleeps for `delay`, then answers with canned text
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
}

impl SimulatedProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ResponseProvider for SimulatedProvider {
    fn respond(&self, request: &PlaygroundRequest) -> Result<String> {
        if !self.delay.is_zero() {
            // The timer must be created inside the runtime context
            let delay = self.delay;
            runtime::block_on(async move { tokio::time::sleep(delay).await });
        }

        Ok(format!(
            "{}\n\n[This is a simulated response for demonstration purposes. In a real implementation, this would connect to the actual {} API.]",
            request.provider.canned_response(),
            request.provider.name()
        ))
    }
}
