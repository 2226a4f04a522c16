//! Query operations over restaurant records.
//!
//! Every operation is a membership filter: it takes any sequence of
//! restaurants (the whole catalog or the result of another query) and
//! returns the records matching a predicate, in input order. Nothing is
//! ranked and nothing fails; an unmatched query yields an empty `Vec`.
//!
//! Text matching is case-insensitive substring containment. The query is
//! lowercased once and compared against lowercased field values, so
//! `"biryani"` matches `"Kacchi Biryani (Mutton)"` but not `"Biriyani"`.
//!
//! # Example
//!
//! ```
//! use thali::catalog::Catalog;
//! use thali::domain::PriceRange;
//! use thali::query::{filter_by_area, filter_by_price};
//!
//! let catalog = Catalog::builtin();
//! let moderate = filter_by_price(catalog, PriceRange::Moderate);
//! let moderate_in_dhanmondi = filter_by_area(moderate, "dhanmondi");
//! assert!(moderate_in_dhanmondi.iter().all(|r| r.price_range == PriceRange::Moderate));
//! ```

mod filter;

pub use filter::RestaurantFilter;

use crate::domain::{Moment, PriceRange, Restaurant};

/// Records whose price tier equals `tier`.
pub fn filter_by_price<'a, I>(restaurants: I, tier: PriceRange) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| restaurant.price_range == tier)
        .collect()
}

/// Records with at least one cuisine tag containing `cuisine`.
pub fn filter_by_cuisine<'a, I>(restaurants: I, cuisine: &str) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let needle = fold(cuisine);
    restaurants
        .into_iter()
        .filter(|restaurant| cuisine_matches(restaurant, &needle))
        .collect()
}

/// Records whose area contains `area`.
pub fn filter_by_area<'a, I>(restaurants: I, area: &str) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let needle = fold(area);
    restaurants
        .into_iter()
        .filter(|restaurant| area_matches(restaurant, &needle))
        .collect()
}

/// Records rated at or above `min_rating`.
pub fn filter_by_rating<'a, I>(restaurants: I, min_rating: f64) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| restaurant.customer_rating >= min_rating)
        .collect()
}

/// Records whose name, any cuisine tag, any signature dish, or area
/// contains `query`.
///
/// Each record appears at most once, however many fields match.
pub fn search<'a, I>(restaurants: I, query: &str) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let needle = fold(query);
    restaurants
        .into_iter()
        .filter(|restaurant| text_matches(restaurant, &needle))
        .collect()
}

/// Records open at `moment`.
///
/// A record is open when it lists hours for the moment's weekday, that day
/// is not flagged closed, and the moment's HHMM lies within the inclusive
/// interval. Intervals crossing midnight never match; see
/// [`DailyHours::contains`](crate::domain::DailyHours::contains).
pub fn open_at<'a, I>(restaurants: I, moment: Moment) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let open: Vec<_> = restaurants
        .into_iter()
        .filter(|restaurant| restaurant.hours_of_operation.is_open_at(moment))
        .collect();
    tracing::debug!(%moment, open = open.len(), "Evaluated opening hours");
    open
}

/// Records open right now according to the local clock.
pub fn open_now<'a, I>(restaurants: I) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    open_at(restaurants, Moment::now())
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub(crate) fn cuisine_matches(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant
        .cuisine_type
        .iter()
        .any(|tag| contains_folded(tag, needle))
}

pub(crate) fn area_matches(restaurant: &Restaurant, needle: &str) -> bool {
    contains_folded(&restaurant.location.area, needle)
}

pub(crate) fn text_matches(restaurant: &Restaurant, needle: &str) -> bool {
    contains_folded(&restaurant.name, needle)
        || cuisine_matches(restaurant, needle)
        || restaurant
            .signature_dishes
            .iter()
            .any(|dish| contains_folded(dish, needle))
        || area_matches(restaurant, needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Contact, Coordinates, DailyHours, HoursOfOperation, Location, Photos, RestaurantId,
        Services, Weekday,
    };

    fn restaurant(id: &str, tier: PriceRange, rating: f64) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(id),
            name: format!("{id} kitchen"),
            cuisine_type: vec!["Thai".to_string(), "Seafood".to_string()],
            price_range: tier,
            location: Location {
                address: "1 Lake Road".to_string(),
                area: "Banani".to_string(),
                coordinates: Coordinates {
                    latitude: 23.79,
                    longitude: 90.40,
                },
                landmarks: vec![],
            },
            hours_of_operation: HoursOfOperation::every_day("10:00", "22:00"),
            signature_dishes: vec!["Tom Yum".to_string()],
            customer_rating: rating,
            services: Services::default(),
            dress_code: None,
            reservation_policy: "Walk-ins welcome".to_string(),
            special_features: vec![],
            contact: Contact {
                phone: "+880 1711-000000".to_string(),
                email: None,
                website: None,
            },
            established_year: 2015,
            description: "Test kitchen".to_string(),
            average_wait_time: "10-15 minutes".to_string(),
            popular_times: vec![],
            payment_methods: vec!["Cash".to_string()],
            photos: Photos {
                exterior: format!("/images/{id}/exterior.jpg"),
                interior: vec![],
                dishes: vec![],
            },
        }
    }

    fn ids(results: &[&Restaurant]) -> Vec<String> {
        results.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_filters_preserve_input_order() {
        let records = vec![
            restaurant("c", PriceRange::Budget, 4.0),
            restaurant("a", PriceRange::Budget, 4.5),
            restaurant("b", PriceRange::Luxury, 3.0),
        ];
        assert_eq!(ids(&filter_by_price(&records, PriceRange::Budget)), ["c", "a"]);
        assert_eq!(ids(&filter_by_cuisine(&records, "thai")), ["c", "a", "b"]);
    }

    #[test]
    fn test_rating_threshold_is_inclusive() {
        let records = vec![
            restaurant("low", PriceRange::Budget, 4.4),
            restaurant("exact", PriceRange::Budget, 4.5),
            restaurant("high", PriceRange::Budget, 4.6),
        ];
        assert_eq!(ids(&filter_by_rating(&records, 4.5)), ["exact", "high"]);
    }

    #[test]
    fn test_negative_threshold_matches_everything() {
        let records = vec![restaurant("a", PriceRange::Budget, 0.0)];
        assert_eq!(filter_by_rating(&records, -1.0).len(), 1);
    }

    #[test]
    fn test_cuisine_match_is_case_insensitive_substring() {
        let records = vec![restaurant("a", PriceRange::Budget, 4.0)];
        assert_eq!(filter_by_cuisine(&records, "SEA").len(), 1);
        assert_eq!(filter_by_cuisine(&records, "afoo").len(), 1);
        assert!(filter_by_cuisine(&records, "Sushi").is_empty());
    }

    #[test]
    fn test_area_match_ignores_other_fields() {
        let records = vec![restaurant("a", PriceRange::Budget, 4.0)];
        assert_eq!(filter_by_area(&records, "bana").len(), 1);
        assert!(filter_by_area(&records, "Lake").is_empty());
    }

    #[test]
    fn test_search_matches_each_field_group() {
        let records = vec![restaurant("a", PriceRange::Budget, 4.0)];
        for query in ["A KITCHEN", "seafood", "tom yum", "banani"] {
            assert_eq!(search(&records, query).len(), 1, "query {query:?}");
        }
        assert!(search(&records, "Lake Road").is_empty());
        assert!(search(&records, "Test kitchen").is_empty());
    }

    #[test]
    fn test_search_returns_record_once_when_several_fields_match() {
        let mut record = restaurant("a", PriceRange::Budget, 4.0);
        record.name = "Thai Garden".to_string();
        record.signature_dishes = vec!["Thai Curry".to_string()];
        let records = vec![record];
        assert_eq!(search(&records, "thai").len(), 1);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let records = vec![
            restaurant("a", PriceRange::Budget, 4.0),
            restaurant("b", PriceRange::Upscale, 4.0),
        ];
        assert_eq!(search(&records, "").len(), 2);
    }

    #[test]
    fn test_open_at_respects_day_entries() {
        let mut closed_monday = restaurant("closed", PriceRange::Budget, 4.0);
        closed_monday.hours_of_operation = closed_monday
            .hours_of_operation
            .with(Weekday::Monday, DailyHours::closed());
        let mut no_monday = restaurant("missing", PriceRange::Budget, 4.0);
        no_monday.hours_of_operation = no_monday.hours_of_operation.without(Weekday::Monday);
        let records = vec![
            restaurant("open", PriceRange::Budget, 4.0),
            closed_monday,
            no_monday,
        ];

        let monday_noon = Moment::new(Weekday::Monday, 12, 0);
        assert_eq!(ids(&open_at(&records, monday_noon)), ["open"]);

        let tuesday_noon = Moment::new(Weekday::Tuesday, 12, 0);
        assert_eq!(open_at(&records, tuesday_noon).len(), 3);
    }

    #[test]
    fn test_queries_compose() {
        let records = vec![
            restaurant("a", PriceRange::Budget, 4.0),
            restaurant("b", PriceRange::Budget, 4.8),
            restaurant("c", PriceRange::Upscale, 4.9),
        ];
        let budget = filter_by_price(&records, PriceRange::Budget);
        let good_budget = filter_by_rating(budget, 4.5);
        assert_eq!(ids(&good_budget), ["b"]);
    }
}
