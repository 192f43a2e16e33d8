//! Configuration schema definitions

use crate::error::{Error, Result};
use fuzzmatch_similarity::{Mode, RankOptions};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let threshold = self.matching.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::invalid_config_value(
                "matching.threshold",
                format!("{} is outside [0, 1]", threshold),
            )
            .with_suggestion("Similarity scores range from 0.0 to 1.0"));
        }
        Ok(())
    }
}

/// Matching defaults used by the compare and rank commands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchingConfig {
    /// Algorithm
    #[serde(default)]
    pub mode: Mode,

    /// Minimum score a ranked candidate needs
    #[serde(default)]
    pub threshold: f64,

    /// Maximum ranked results, 0 for unlimited
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            threshold: 0.0,
            limit: default_limit(),
        }
    }
}

impl MatchingConfig {
    /// Convert to options for [`fuzzmatch_similarity::rank`]
    pub fn to_rank_options(&self) -> RankOptions {
        RankOptions::default()
            .with_mode(self.mode)
            .with_threshold(self.threshold)
            .with_limit(self.limit)
    }
}

fn default_limit() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
