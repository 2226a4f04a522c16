//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::types::parse_time;
use crate::domain::Weekday;

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by price tier ("$" to "$$$$", or budget/moderate/upscale/luxury)
    ///
    /// An unrecognized tier matches nothing.
    #[arg(short, long)]
    pub price: Option<String>,

    /// Filter by cuisine (case-insensitive substring of any cuisine tag)
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// Filter by area (case-insensitive substring)
    #[arg(short, long)]
    pub area: Option<String>,

    /// Minimum customer rating (inclusive)
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub min_rating: Option<f64>,

    /// Only restaurants open right now
    #[arg(short, long)]
    pub open_now: bool,
}

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for in names, cuisines, signature dishes and areas
    pub query: String,
}

/// Arguments for the `open` command
#[derive(Parser, Debug, Clone, Default)]
pub struct OpenArgs {
    /// Day of the week to check, e.g. monday or mon, any case (default: today)
    #[arg(short, long)]
    pub day: Option<Weekday>,

    /// Time of day to check, 24-hour HH:MM (default: now)
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<u32>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Restaurant ID to display
    pub restaurant_id: String,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone, Default)]
pub struct ExportArgs {}
