//! Settings file for the terminal session.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use chess_rules::RulesConfig;

pub const DEFAULT_LOG_FILTER: &str = "chess_rules=info,chess_play=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Draw pieces with chess glyphs instead of letters.
    pub unicode: bool,
    pub show_coordinates: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub rules: RulesConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            unicode: false,
            show_coordinates: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rules: RulesConfig::default(),
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
