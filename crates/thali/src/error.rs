//! Error types for thali.
//!
//! Queries never fail; errors only arise at the boundary where a catalog is
//! built from records, read from a file, or configured.

use crate::domain::RestaurantId;
use std::io;
use thiserror::Error;

/// The error type for thali operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog could not be built.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Restaurant not found.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),
}

/// Reasons a catalog cannot be built from a set of records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A JSONL line did not parse as a restaurant record.
    #[error("Malformed restaurant record at line {line_number}: {source}")]
    MalformedRecord {
        /// 1-based line number in the source file
        line_number: usize,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an ID.
    #[error("Duplicate restaurant ID: {0}")]
    DuplicateId(RestaurantId),

    /// A record has an empty exterior photo reference.
    #[error("Restaurant {0} has no exterior photo")]
    MissingExteriorPhoto(RestaurantId),
}

/// A weekday name that is neither a full English day name nor its
/// three-letter abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid weekday '{0}': expected a day name such as monday or mon")]
pub struct ParseWeekdayError(pub String);

/// A specialized Result type for thali operations.
pub type Result<T> = std::result::Result<T, Error>;
