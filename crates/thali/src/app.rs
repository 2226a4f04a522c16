//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that resolves configuration and
//! the active catalog, and provides a context for executing CLI commands.
//!
//! # Example
//!
//! ```no_run
//! use thali::app::App;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new("."), None)?;
//!     println!("{} restaurants", app.catalog().len());
//!     Ok(())
//! }
//! ```

use crate::catalog::Catalog;
use crate::config::ThaliConfig;
use crate::error::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
///
/// Holds the catalog every command queries: the built-in one, or the JSONL
/// file named by `catalog-file` in the configuration.
#[derive(Debug)]
pub struct App {
    /// Active catalog (borrowed when built-in)
    catalog: Cow<'static, Catalog>,

    /// Catalog file, when not using the built-in catalog
    catalog_file: Option<PathBuf>,
}

impl App {
    /// Create an App from the given working directory.
    ///
    /// # Arguments
    ///
    /// * `working_dir` - The directory to look for `.thali.yaml` in
    /// * `config_path` - Explicit config file, overriding the lookup
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file does not exist
    /// - Configuration cannot be parsed
    /// - The configured catalog file cannot be read or violates catalog invariants
    pub fn from_directory(working_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let (config, base_dir) = ThaliConfig::discover(working_dir, config_path)?;

        match config.catalog_path(&base_dir) {
            Some(path) => {
                let catalog = Catalog::load(&path)?;
                Ok(Self {
                    catalog: Cow::Owned(catalog),
                    catalog_file: Some(path),
                })
            }
            None => Ok(Self::builtin()),
        }
    }

    /// An App over the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            catalog: Cow::Borrowed(Catalog::builtin()),
            catalog_file: None,
        }
    }

    /// The active catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Path of the loaded catalog file, or `None` for the built-in catalog.
    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }
}
