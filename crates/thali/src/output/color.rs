//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Good:  green   (ratings 4.5+, budget tier)
//!   - Warning:       yellow  (ratings 4.0-4.5, upscale tier)
//!   - Error/Poor:    red     (ratings below 4.0, closed days)
//!   - Info/Reference: cyan   (restaurant IDs)
//!   - Accent:        magenta (cuisine tags, luxury tier)
//!   - Muted:         dimmed  (field labels)
//!   - Emphasis:      bold    (section headers, names)

use crate::domain::PriceRange;
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply color to a price tier label.
pub(crate) fn colorize_price(tier: PriceRange, config: &OutputConfig) -> String {
    let text = tier.label();
    match tier {
        PriceRange::Budget => success(text, config),
        PriceRange::Moderate => text.to_string(),
        PriceRange::Upscale => warning(text, config),
        PriceRange::Luxury if config.use_colors => text.magenta().bold().to_string(),
        PriceRange::Luxury => text.to_string(),
    }
}

/// Rating with a star icon, colored by how good it is.
pub(crate) fn colorize_rating(rating: f64, config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "*" } else { "★" };
    let text = format!("{icon} {rating:.1}");
    if rating >= 4.5 {
        success(&text, config)
    } else if rating >= 4.0 {
        warning(&text, config)
    } else {
        error(&text, config)
    }
}

/// Colorize a restaurant ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    info(id, config)
}

/// Colorize cuisine tags as a comma-separated list (magenta).
pub(crate) fn colorize_tags(tags: &[String], config: &OutputConfig) -> String {
    let joined = tags.join(", ");
    if !config.use_colors {
        return joined;
    }
    joined.magenta().to_string()
}

/// Dim text (field labels).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Bold text (headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
