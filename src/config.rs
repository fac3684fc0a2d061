//! Store configuration

use crate::change_detection::{DiffOptions, MatchStrategy};
use crate::error::{DocsnapError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of `config.json` at the store root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_match_strategy")]
    pub match_strategy: MatchStrategy,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u64,
}

fn default_version() -> String {
    crate::FORMAT_VERSION.to_string()
}
fn default_similarity_threshold() -> f64 {
    crate::DEFAULT_SIMILARITY_THRESHOLD
}
fn default_match_strategy() -> MatchStrategy {
    MatchStrategy::First
}
fn default_words_per_minute() -> u64 {
    crate::DEFAULT_WORDS_PER_MINUTE
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            created: None,
            similarity_threshold: default_similarity_threshold(),
            match_strategy: default_match_strategy(),
            words_per_minute: default_words_per_minute(),
        }
    }
}

impl StoreConfig {
    /// Load from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: StoreConfig = serde_json::from_str(&content)
            .map_err(|e| DocsnapError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.similarity_threshold)?;
        if self.words_per_minute == 0 {
            return Err(DocsnapError::config("words_per_minute must be greater than 0"));
        }
        Ok(())
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            similarity_threshold: self.similarity_threshold,
            strategy: self.match_strategy,
        }
    }
}

/// Thresholds live in (0, 1]
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(DocsnapError::config(format!(
            "similarity_threshold must be in (0, 1], got {}",
            threshold
        )))
    }
}
