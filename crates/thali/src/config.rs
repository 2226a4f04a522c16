//! Configuration management for thali.
//!
//! Configuration is optional. When present it lives in a YAML file, by
//! default `.thali.yaml` in the working directory:
//!
//! ```yaml
//! catalog-file: data/restaurants.jsonl
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".thali.yaml";

/// Configuration file structure for thali
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThaliConfig {
    /// JSONL catalog to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

impl ThaliConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Locate and load the configuration.
    ///
    /// An explicit path must exist. Without one, `.thali.yaml` in
    /// `working_dir` is used if present, and defaults otherwise.
    ///
    /// Returns the configuration together with the directory relative paths
    /// resolve against.
    pub fn discover(working_dir: &Path, explicit: Option<&Path>) -> Result<(Self, PathBuf)> {
        let path = match explicit.map(|path| working_dir.join(path)) {
            Some(path) if !path.is_file() => {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => path,
            None => {
                let default_path = working_dir.join(CONFIG_FILE_NAME);
                if !default_path.is_file() {
                    tracing::debug!(dir = %working_dir.display(), "No config file, using defaults");
                    return Ok((Self::default(), working_dir.to_path_buf()));
                }
                default_path
            }
        };

        let config = Self::load(&path)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        let base_dir = path
            .parent()
            .map_or_else(|| working_dir.to_path_buf(), Path::to_path_buf);
        Ok((config, base_dir))
    }

    /// The configured catalog file, resolved against `base_dir`.
    pub fn catalog_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.catalog_file.as_ref().map(|file| base_dir.join(file))
    }
}
