//! Configuration module for the ednt CLI.
//!
//! Settings come from an optional `ednt.toml` in the working directory
//! (or an explicit `--config` path); command-line flags override file
//! values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ednr::DiscardBehavior;

use crate::error::{EdntError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ednt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Format-specific configuration.
    #[serde(default)]
    pub format: FormatConfig,

    /// Convert-specific configuration.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Format-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormatConfig {
    /// Emit named escapes for the four recognized control characters.
    #[serde(default)]
    pub char_names: bool,
}

/// Convert-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertConfig {
    /// Substitute unhandled tagged values with their payload instead of
    /// failing.
    #[serde(default)]
    pub ignore_tags: bool,

    /// What to do with `#_` forms: `propagate` or `reject`.
    #[serde(default = "default_discard")]
    pub discard: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            ignore_tags: false,
            discard: default_discard(),
        }
    }
}

fn default_discard() -> String {
    "propagate".to_string()
}

impl Config {
    /// Loads configuration from `path` when given, from
    /// [`CONFIG_FILE_NAME`] in the working directory when present, and
    /// falls back to defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from_path(default_path)
                } else {
                    Ok(Config::default())
                }
            },
        }
    }

    fn load_from_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EdntError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| EdntError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

impl ConvertConfig {
    /// Interprets the `discard` field.
    pub fn discard_behavior(&self) -> Result<DiscardBehavior> {
        match self.discard.as_str() {
            "propagate" => Ok(DiscardBehavior::Propagate),
            "reject" => Ok(DiscardBehavior::Reject),
            other => Err(EdntError::Config(format!(
                "unknown discard behavior `{other}` (expected `propagate` or `reject`)"
            ))),
        }
    }
}
