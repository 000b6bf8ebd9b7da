//! Application Configuration
//!
//! Every field has a default, so an empty or partial JSON object is a valid
//! configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_STORAGE_PREFIX: &str = "now-later";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix of every persisted key
    pub storage_prefix: String,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Seed the sample board when nothing has been saved yet
    pub seed_sample_board: bool,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            seed_sample_board: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: AppConfig = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidInput(format!("config: {e}")))?;
        if config.storage_prefix.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "config: storage_prefix must not be empty".into(),
            ));
        }
        Ok(config)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.storage_prefix)
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Names of the four persisted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub boards: String,
    pub current_board: String,
    pub user: String,
    pub dark_mode: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            boards: format!("{prefix}-boards"),
            current_board: format!("{prefix}-current-board"),
            user: format!("{prefix}-user"),
            dark_mode: format!("{prefix}-dark-mode"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_STORAGE_PREFIX)
    }
}
