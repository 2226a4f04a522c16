//! The restaurant catalog.
//!
//! A [`Catalog`] is an ordered, immutable collection of restaurants. It is
//! built once, either from the records shipped with the crate
//! ([`Catalog::builtin`]) or from a JSONL file ([`Catalog::load`]), and
//! only read afterwards.
//!
//! # Invariants
//!
//! - Restaurant IDs are unique
//! - Every restaurant has a non-empty exterior photo reference
//!
//! Price tiers and weekday keys are closed enums, so they cannot hold values
//! outside their defined sets.
//!
//! # Example
//!
//! ```
//! use thali::catalog::Catalog;
//! use thali::domain::PriceRange;
//!
//! let catalog = Catalog::builtin();
//! for restaurant in catalog.by_price(PriceRange::Luxury) {
//!     println!("{} ({})", restaurant.name, restaurant.location.area);
//! }
//! ```

mod dataset;
mod jsonl;

use crate::domain::{Moment, PriceRange, Restaurant, RestaurantId};
use crate::error::CatalogError;
use crate::query::{self, RestaurantFilter};
use std::collections::HashSet;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let restaurants = dataset::restaurants();
    tracing::debug!(count = restaurants.len(), "Initialized built-in catalog");
    Catalog { restaurants }
});

/// Ordered, read-only collection of restaurants.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    ///
    /// Initialized on first use and shared for the rest of the process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// - `CatalogError::DuplicateId` if two records share an ID
    /// - `CatalogError::MissingExteriorPhoto` if a record's exterior photo is empty
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for restaurant in &restaurants {
            if !seen.insert(&restaurant.id) {
                return Err(CatalogError::DuplicateId(restaurant.id.clone()));
            }
            if restaurant.photos.exterior.trim().is_empty() {
                return Err(CatalogError::MissingExteriorPhoto(restaurant.id.clone()));
            }
        }

        tracing::debug!(count = restaurants.len(), "Built catalog");
        Ok(Self { restaurants })
    }

    /// All restaurants in catalog order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Iterate over restaurants in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the catalog holds no restaurants.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Look up a restaurant by ID.
    pub fn get(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|restaurant| &restaurant.id == id)
    }

    /// Restaurants in the given price tier.
    pub fn by_price(&self, tier: PriceRange) -> Vec<&Restaurant> {
        query::filter_by_price(self, tier)
    }

    /// Restaurants with a cuisine tag containing `cuisine`, ignoring case.
    pub fn by_cuisine(&self, cuisine: &str) -> Vec<&Restaurant> {
        query::filter_by_cuisine(self, cuisine)
    }

    /// Restaurants whose area contains `area`, ignoring case.
    pub fn by_area(&self, area: &str) -> Vec<&Restaurant> {
        query::filter_by_area(self, area)
    }

    /// Restaurants rated at least `min_rating`.
    pub fn by_min_rating(&self, min_rating: f64) -> Vec<&Restaurant> {
        query::filter_by_rating(self, min_rating)
    }

    /// Restaurants whose name, cuisine, signature dishes or area contain `text`.
    pub fn search(&self, text: &str) -> Vec<&Restaurant> {
        query::search(self, text)
    }

    /// Restaurants open at `moment`.
    pub fn open_at(&self, moment: Moment) -> Vec<&Restaurant> {
        query::open_at(self, moment)
    }

    /// Restaurants open now, by the local clock.
    pub fn open_now(&self) -> Vec<&Restaurant> {
        query::open_now(self)
    }

    /// Restaurants matching every criterion of `filter`.
    pub fn list(&self, filter: &RestaurantFilter) -> Vec<&Restaurant> {
        filter.apply(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.restaurants.iter()
    }
}
