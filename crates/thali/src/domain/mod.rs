//! Domain types for the restaurant catalog.
//!
//! This module contains the record types held by the catalog. Field names
//! serialize in camelCase so exported catalogs keep the authoring format.

mod hours;

pub use hours::{DailyHours, HoursOfOperation, Moment, Weekday, parse_hhmm};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a restaurant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub String);

impl RestaurantId {
    /// Create a new restaurant ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RestaurantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RestaurantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A restaurant record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Unique, stable identifier assigned at authoring time
    pub id: RestaurantId,

    /// Display name
    pub name: String,

    /// Cuisine tags (order irrelevant for matching)
    pub cuisine_type: Vec<String>,

    /// Price tier
    pub price_range: PriceRange,

    /// Address, area, coordinates and landmarks
    pub location: Location,

    /// Opening hours keyed by weekday
    pub hours_of_operation: HoursOfOperation,

    /// Signature dish names
    pub signature_dishes: Vec<String>,

    /// Customer rating, expected in 0.0..=5.0
    pub customer_rating: f64,

    /// Service flags
    pub services: Services,

    /// Dress code (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress_code: Option<String>,

    /// Reservation policy
    pub reservation_policy: String,

    /// Special feature tags
    pub special_features: Vec<String>,

    /// Contact details
    pub contact: Contact,

    /// Year the restaurant opened
    pub established_year: i32,

    /// Free-text description
    pub description: String,

    /// Typical wait, e.g. "15-25 minutes"
    pub average_wait_time: String,

    /// Busy windows, e.g. "Friday 1pm-3pm"
    pub popular_times: Vec<String>,

    /// Accepted payment methods
    pub payment_methods: Vec<String>,

    /// Image references
    pub photos: Photos,
}

/// Price tier of a restaurant, from low to very high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    /// `$`
    #[serde(rename = "$")]
    Budget,

    /// `$$`
    #[serde(rename = "$$")]
    Moderate,

    /// `$$$`
    #[serde(rename = "$$$")]
    Upscale,

    /// `$$$$`
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// All tiers, cheapest first.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Upscale,
        PriceRange::Luxury,
    ];

    /// The `$` label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    /// Parse a tier from its `$` label or its name (case-insensitive).
    ///
    /// Returns `None` for anything else; callers treat that as "no tier
    /// matches" rather than as an error.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|tier| {
            tier.label() == label || tier.name().eq_ignore_ascii_case(label)
        })
    }

    fn name(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Upscale => "upscale",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a restaurant is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Postal address
    pub address: String,

    /// Named area or neighborhood
    pub area: String,

    /// Geographic coordinates
    pub coordinates: Coordinates,

    /// Nearby landmarks
    pub landmarks: Vec<String>,
}

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

/// Services offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    /// Delivers orders
    pub delivery: bool,
    /// Offers takeout
    pub takeout: bool,
    /// Has seating
    pub dine_in: bool,
    /// Accepts reservations
    pub reservations: bool,
}

/// Contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number
    pub phone: String,

    /// Email address (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Website (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Image references for a restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photos {
    /// Exterior image; every record carries one
    pub exterior: String,

    /// Interior images
    #[serde(default)]
    pub interior: Vec<String>,

    /// Dish images
    #[serde(default)]
    pub dishes: Vec<String>,
}
