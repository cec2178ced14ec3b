//! Curator configuration
//!
//! Settings come from the process environment, with a `.env` file in the
//! working directory loaded first when present:
//!
//! | Variable                             | Default                              |
//! |--------------------------------------|--------------------------------------|
//! | `PROMPT_CURATOR_DATA_DIR`            | `<platform data dir>/prompt-curator` |
//! | `PROMPT_CURATOR_STORE_FILE`          | `prompts.json`                       |
//! | `PROMPT_CURATOR_PERSIST`             | `true`                               |
//! | `PROMPT_CURATOR_PLAYGROUND_DELAY_MS` | `2000`                               |
//! | `PROMPT_CURATOR_HISTORY_LIMIT`       | `5`                                  |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::errors::{CuratorError, Result};

const ENV_DATA_DIR: &str = "PROMPT_CURATOR_DATA_DIR";
const ENV_STORE_FILE: &str = "PROMPT_CURATOR_STORE_FILE";
const ENV_PERSIST: &str = "PROMPT_CURATOR_PERSIST";
const ENV_PLAYGROUND_DELAY_MS: &str = "PROMPT_CURATOR_PLAYGROUND_DELAY_MS";
const ENV_HISTORY_LIMIT: &str = "PROMPT_CURATOR_HISTORY_LIMIT";

/// Runtime settings for a [`CuratorController`](crate::controller::CuratorController)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratorConfig {
    /// Directory holding the store file
    pub data_dir:         PathBuf,
    /// Store file name inside `data_dir`
    pub store_file:       String,
    /// Mirror the store to disk after every mutation
    pub persist:          bool,
    /// Fake latency of the simulated Playground provider
    pub playground_delay: Duration,
    /// Number of Playground results kept, newest first
    pub history_limit:    usize,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            data_dir:         default_data_dir(),
            store_file:       "prompts.json".to_string(),
            persist:          true,
            playground_delay: Duration::from_millis(2000),
            history_limit:    5,
        }
    }
}

impl CuratorConfig {
    /// In-memory configuration: nothing touches disk and the Playground
    /// answers immediately
    pub fn ephemeral() -> Self {
        Self {
            persist: false,
            playground_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Build a configuration from the environment (and `.env`)
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(ENV_STORE_FILE) {
            if file.trim().is_empty() {
                return Err(CuratorError::ConfigError(format!(
                    "{} must not be empty",
                    ENV_STORE_FILE
                )));
            }
            config.store_file = file;
        }
        if let Some(raw) = lookup(ENV_PERSIST) {
            config.persist = parse_var(ENV_PERSIST, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PLAYGROUND_DELAY_MS) {
            config.playground_delay = Duration::from_millis(parse_var(ENV_PLAYGROUND_DELAY_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_HISTORY_LIMIT) {
            config.history_limit = parse_var(ENV_HISTORY_LIMIT, &raw)?;
        }

        Ok(config)
    }

    /// Full path of the store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompt-curator")
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid value {:?} for {}", raw, key))
        .map_err(|e| CuratorError::ConfigError(format!("{:#}", e)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CuratorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CuratorConfig::default());
        assert_eq!(config.history_limit, 5);
        assert!(config.store_path().ends_with("prompt-curator/prompts.json"));
    }

    #[test]
    fn test_overrides() {
        let config = CuratorConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/curator"),
            (ENV_STORE_FILE, "mine.json"),
            (ENV_PERSIST, "false"),
            (ENV_PLAYGROUND_DELAY_MS, "0"),
            (ENV_HISTORY_LIMIT, " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.store_path(), PathBuf::from("/tmp/curator/mine.json"));
        assert!(!config.persist);
        assert_eq!(config.playground_delay, Duration::ZERO);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = CuratorConfig::from_lookup(lookup(&[(ENV_HISTORY_LIMIT, "lots")])).unwrap_err();
        match err {
            CuratorError::ConfigError(msg) => assert!(msg.contains(ENV_HISTORY_LIMIT)),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_store_file_rejected() {
        assert!(CuratorConfig::from_lookup(lookup(&[(ENV_STORE_FILE, "  ")])).is_err());
    }

    #[test]
    fn test_ephemeral() {
        let config = CuratorConfig::ephemeral();
        assert!(!config.persist);
        assert_eq!(config.playground_delay, Duration::ZERO);
    }
}
