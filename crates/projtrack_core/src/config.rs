//! Runtime configuration.
//!
//! Values come from the environment, then CLI overrides. Logging stays off
//! unless a log directory is configured.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "PROJTRACK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PROJTRACK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TrackerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Applies explicit overrides on top of this configuration.
    pub fn with_overrides(mut self, log_level: Option<String>, log_dir: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(dir) = log_dir {
            self.log_dir = Some(dir);
        }
        self
    }
}
