//! Composite filter combining several query criteria.

use super::{area_matches, cuisine_matches, fold, text_matches};
use crate::domain::{Moment, PriceRange, Restaurant};

/// Filter for querying restaurants.
///
/// Unset criteria are ignored; set criteria must all hold. Each criterion
/// uses the same predicate as the matching function in [`crate::query`].
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    /// Filter by price tier
    pub price: Option<PriceRange>,

    /// Filter by cuisine tag substring
    pub cuisine: Option<String>,

    /// Filter by area substring
    pub area: Option<String>,

    /// Filter by minimum rating (inclusive)
    pub min_rating: Option<f64>,

    /// Filter by free-text search
    pub text: Option<String>,

    /// Filter by opening status at a moment
    pub open_at: Option<Moment>,
}

impl RestaurantFilter {
    /// Whether no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.cuisine.is_none()
            && self.area.is_none()
            && self.min_rating.is_none()
            && self.text.is_none()
            && self.open_at.is_none()
    }

    /// Records matching every set criterion, in input order.
    pub fn apply<'a, I>(&self, restaurants: I) -> Vec<&'a Restaurant>
    where
        I: IntoIterator<Item = &'a Restaurant>,
    {
        let cuisine = self.cuisine.as_deref().map(fold);
        let area = self.area.as_deref().map(fold);
        let text = self.text.as_deref().map(fold);

        let results: Vec<_> = restaurants
            .into_iter()
            .filter(|restaurant| {
                // Apply price filter
                if let Some(price) = self.price {
                    if restaurant.price_range != price {
                        return false;
                    }
                }

                // Apply cuisine filter
                if let Some(cuisine) = &cuisine {
                    if !cuisine_matches(restaurant, cuisine) {
                        return false;
                    }
                }

                // Apply area filter
                if let Some(area) = &area {
                    if !area_matches(restaurant, area) {
                        return false;
                    }
                }

                // Apply rating filter
                if let Some(min_rating) = self.min_rating {
                    if restaurant.customer_rating < min_rating {
                        return false;
                    }
                }

                // Apply text filter
                if let Some(text) = &text {
                    if !text_matches(restaurant, text) {
                        return false;
                    }
                }

                // Apply opening hours filter
                if let Some(moment) = self.open_at {
                    if !restaurant.hours_of_operation.is_open_at(moment) {
                        return false;
                    }
                }

                true
            })
            .collect();

        tracing::debug!(filter = ?self, matches = results.len(), "Applied restaurant filter");
        results
    }
}
