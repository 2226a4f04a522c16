//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, icons)
//! - [`json`]: JSON serialization for programmatic output

pub mod color;
mod json;

use crate::domain::{Restaurant, Weekday};
use std::env;
use std::io::{self, Write};

use color::{bold, colorize_id, colorize_price, colorize_rating, colorize_tags, dimmed, error};
use json::{print_restaurant_json, print_restaurants_json};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for output formatting.
///
/// This struct holds settings that control how output is formatted,
/// including terminal width limits, ASCII fallback mode, and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `THALI_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `THALI_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `THALI_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`OutputConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_width = match lookup("THALI_MAX_WIDTH") {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "THALI_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match lookup("THALI_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "THALI_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("THALI_COLOR").is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size().map_or(DEFAULT_TERMINAL_WIDTH as usize, |(w, _)| w.0 as usize)
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a list of restaurants in the specified format
pub fn print_restaurants(restaurants: &[&Restaurant], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_restaurants_text(&mut handle, restaurants, &config),
        OutputMode::Json => print_restaurants_json(&mut handle, restaurants),
    }
}

/// Print a restaurant with full details (for the show command)
pub fn print_restaurant_details(restaurant: &Restaurant, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_restaurant_details_text(
            &mut handle,
            restaurant,
            get_terminal_width().min(config.max_width),
            &config,
        ),
        OutputMode::Json => print_restaurant_json(&mut handle, restaurant),
    }
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_restaurants_text<W: Write>(
    w: &mut W,
    restaurants: &[&Restaurant],
    config: &OutputConfig,
) -> io::Result<()> {
    if restaurants.is_empty() {
        writeln!(w, "No restaurants found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} restaurant(s):", restaurants.len())?;
    writeln!(w)?;

    for restaurant in restaurants {
        writeln!(
            w,
            "{}  {}  {}  {}  {}  {}",
            colorize_id(restaurant.id.as_str(), config),
            restaurant.name,
            colorize_price(restaurant.price_range, config),
            colorize_rating(restaurant.customer_rating, config),
            restaurant.location.area,
            colorize_tags(&restaurant.cuisine_type, config)
        )?;
    }

    Ok(())
}

fn print_restaurant_details_text<W: Write>(
    w: &mut W,
    restaurant: &Restaurant,
    content_width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    // Header: ID and name
    writeln!(
        w,
        "{}: {}",
        colorize_id(restaurant.id.as_str(), config),
        bold(&restaurant.name, config)
    )?;

    writeln!(
        w,
        "{}  {}    {}  {}    {}  {}",
        dimmed("Price:", config),
        colorize_price(restaurant.price_range, config),
        dimmed("Rating:", config),
        colorize_rating(restaurant.customer_rating, config),
        dimmed("Since:", config),
        restaurant.established_year
    )?;
    writeln!(
        w,
        "{} {}",
        dimmed("Cuisine:", config),
        colorize_tags(&restaurant.cuisine_type, config)
    )?;
    writeln!(
        w,
        "{} {} ({})",
        dimmed("Address:", config),
        restaurant.location.address,
        restaurant.location.area
    )?;
    if !restaurant.location.landmarks.is_empty() {
        writeln!(
            w,
            "{} {}",
            dimmed("Near:", config),
            restaurant.location.landmarks.join(", ")
        )?;
    }
    writeln!(w, "{} {}", dimmed("Phone:", config), restaurant.contact.phone)?;
    if let Some(email) = &restaurant.contact.email {
        writeln!(w, "{} {}", dimmed("Email:", config), email)?;
    }
    if let Some(website) = &restaurant.contact.website {
        writeln!(w, "{} {}", dimmed("Website:", config), website)?;
    }
    if let Some(dress_code) = &restaurant.dress_code {
        writeln!(w, "{} {}", dimmed("Dress code:", config), dress_code)?;
    }

    print_text_section(w, "Description", &restaurant.description, content_width, config)?;
    print_list_section(w, "Signature Dishes", &restaurant.signature_dishes, config)?;

    writeln!(w)?;
    writeln!(w, "{}:", bold("Hours", config))?;
    for day in Weekday::ALL {
        let hours = match restaurant.hours_of_operation.for_day(day) {
            Some(hours) if !hours.closed => format!("{}-{}", hours.open, hours.close),
            _ => error("closed", config),
        };
        writeln!(w, "  {:<10} {}", day.name(), hours)?;
    }

    let services = &restaurant.services;
    let offered: Vec<&str> = [
        (services.delivery, "delivery"),
        (services.takeout, "takeout"),
        (services.dine_in, "dine-in"),
        (services.reservations, "reservations"),
    ]
    .into_iter()
    .filter_map(|(offered, name)| offered.then_some(name))
    .collect();
    writeln!(w)?;
    writeln!(w, "{} {}", dimmed("Services:", config), offered.join(", "))?;
    writeln!(
        w,
        "{} {}",
        dimmed("Reservations:", config),
        restaurant.reservation_policy
    )?;
    writeln!(
        w,
        "{} {}",
        dimmed("Typical wait:", config),
        restaurant.average_wait_time
    )?;
    if !restaurant.popular_times.is_empty() {
        writeln!(
            w,
            "{} {}",
            dimmed("Busiest:", config),
            restaurant.popular_times.join("; ")
        )?;
    }
    if !restaurant.payment_methods.is_empty() {
        writeln!(
            w,
            "{} {}",
            dimmed("Payment:", config),
            restaurant.payment_methods.join(", ")
        )?;
    }
    if !restaurant.special_features.is_empty() {
        writeln!(
            w,
            "{} {}",
            dimmed("Features:", config),
            restaurant.special_features.join(", ")
        )?;
    }

    Ok(())
}

// ============================================================================
// Section Printing Helpers
// ============================================================================

/// Print a text section with a bold title and wrapped, indented content.
fn print_text_section<W: Write>(
    w: &mut W,
    title: &str,
    content: &str,
    width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    writeln!(w, "{}:", bold(title, config))?;
    for line in wrap_text(content, width.saturating_sub(2)) {
        writeln!(w, "  {line}")?;
    }
    Ok(())
}

/// Print a bulleted list section (nothing when the list is empty).
fn print_list_section<W: Write>(
    w: &mut W,
    title: &str,
    items: &[String],
    config: &OutputConfig,
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    writeln!(w, "{}:", bold(title, config))?;
    let bullet = if config.use_ascii { "-" } else { "•" };
    for item in items {
        writeln!(w, "  {bullet} {item}")?;
    }
    Ok(())
}

/// Wrap text to fit within a given width, preserving existing line breaks.
/// Uses textwrap to handle edge cases like long words (URLs, file paths).
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width)
                    .into_iter()
                    .map(std::borrow::Cow::into_owned)
                    .collect()
            }
        })
        .collect()
}
