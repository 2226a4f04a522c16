//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for thali using clap's derive API.
//! Each command has its own argument struct.
//!
//! # Commands
//!
//! - `list`: List restaurants with optional filters
//! - `search`: Free-text search across names, cuisines, dishes and areas
//! - `open`: Show restaurants open now, or at a given day and time
//! - `show`: Show restaurant details
//! - `export`: Write the active catalog as JSONL
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands except `export`)
//! - `--config`: Use a specific config file instead of `.thali.yaml`
//!
//! # Example
//!
//! ```bash
//! thali list --price '$$' --area dhanmondi
//! thali search biryani
//! thali open --day monday --time 13:00
//! thali show kacchi-bhai
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{ExportArgs, ListArgs, OpenArgs, SearchArgs, ShowArgs};

// Re-export value parsers
pub use types::parse_time;

/// Thali - query a catalog of restaurants
///
/// Filter restaurants by price, cuisine, area and rating, search them by
/// name or dish, and check which are open.
#[derive(Parser, Debug)]
#[command(name = "thali")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of `.thali.yaml` in the current directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List restaurants with optional filters
    ///
    /// Filters combine: a restaurant is listed only if it matches all of them.
    /// Results keep catalog order.
    List(ListArgs),

    /// Search restaurants by text
    ///
    /// Matches names, cuisine tags, signature dishes and areas, ignoring case.
    Search(SearchArgs),

    /// Show restaurants that are open
    ///
    /// Uses the local clock unless a day and/or time is given. Opening hours
    /// that run past midnight are not recognized as open.
    Open(OpenArgs),

    /// Show detailed information about a restaurant
    Show(ShowArgs),

    /// Write the catalog as JSONL to stdout
    ///
    /// The output can be used as a `catalog-file` in `.thali.yaml`.
    Export(ExportArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Thali restaurant catalog");
            println!("Use --help for more information");
            return Ok(());
        };

        let app = App::from_directory(&std::env::current_dir()?, self.config.as_deref())?;

        match command {
            Commands::List(args) => execute::execute_list(&app, args, output_mode),
            Commands::Search(args) => execute::execute_search(&app, args, output_mode),
            Commands::Open(args) => execute::execute_open(&app, args, output_mode),
            Commands::Show(args) => execute::execute_show(&app, args, output_mode),
            Commands::Export(args) => execute::execute_export(&app, args),
        }
    }
}
