//! Configuration for patchsplit.
//!
//! A small optional YAML settings file supplies default encoding labels
//! and the combined-header switch, so repositories with non-default
//! encodings don't need the flags on every invocation. CLI flags always
//! override file values.

use crate::encoding::{EncodingConfig, encoding_for_label};
use crate::error::{Result, SplitError};
use crate::patch::SplitOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings consumed by the splitter: two encoding identifiers and the
/// combined-header extension switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoding label for diff content lines.
    pub content_encoding: String,
    /// Encoding label for tool metadata lines.
    pub system_encoding: String,
    /// Recognize combined one-line headers as patch boundaries.
    pub combined_headers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_encoding: "utf-8".to_string(),
            system_encoding: "utf-8".to_string(),
            combined_headers: false,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SplitError::UserError)` - Unreadable file, parse error, or
    ///   unknown encoding label
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SplitError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SplitError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SplitError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate the config: both encoding labels must resolve.
    pub fn validate(&self) -> Result<()> {
        encoding_for_label(&self.content_encoding)?;
        encoding_for_label(&self.system_encoding)?;
        Ok(())
    }

    /// Resolve the configured labels to an encoding pair.
    pub fn encodings(&self) -> Result<EncodingConfig> {
        EncodingConfig::from_labels(&self.content_encoding, &self.system_encoding)
    }

    /// Parser options derived from this config.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            combined_headers: self.combined_headers,
        }
    }
}
