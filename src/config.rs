//! Harness configuration
//!
//! Provides the run-level gate policy from a TOML document. Every field has a
//! default, so an empty file is a valid configuration:
//!
//! ```toml
//! [gate]
//! fail_at = "bad"          # info | warning | bad | fatal
//! did_not_run = "ignore"   # ignore | fail
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::GatePolicy;

/// Conventional config file name
pub const CONFIG_FILE: &str = "harness.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Harness configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Policy deciding which results fail a run
    #[serde(default)]
    pub gate: GatePolicy,
}

impl HarnessConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded harness config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Load `harness.toml` from a directory, or the defaults if there is none
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Render as TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
