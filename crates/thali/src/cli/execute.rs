//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{ExportArgs, ListArgs, OpenArgs, SearchArgs, ShowArgs};
use crate::app::App;
use crate::domain::{Moment, PriceRange, Restaurant, RestaurantId};
use crate::error::Error;
use crate::output::{self, OutputMode};
use crate::query::RestaurantFilter;

/// Execute the list command
pub fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let restaurants = list_restaurants(app, args, Moment::now());
    output::print_restaurants(&restaurants, output_mode)?;
    Ok(())
}

/// Execute the search command
pub fn execute_search(app: &App, args: &SearchArgs, output_mode: OutputMode) -> Result<()> {
    let restaurants = app.catalog().search(&args.query);
    tracing::debug!(query = %args.query, matches = restaurants.len(), "Searched catalog");
    output::print_restaurants(&restaurants, output_mode)?;
    Ok(())
}

/// Execute the open command
pub fn execute_open(app: &App, args: &OpenArgs, output_mode: OutputMode) -> Result<()> {
    let moment = resolve_moment(args, Moment::now());
    let restaurants = app.catalog().open_at(moment);

    if output_mode == OutputMode::Text {
        output::print_message(&format!("Open on {moment}:"))?;
    }
    output::print_restaurants(&restaurants, output_mode)?;
    Ok(())
}

/// Execute the show command
pub fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let id = RestaurantId::new(args.restaurant_id.trim());
    let restaurant = app
        .catalog()
        .get(&id)
        .ok_or_else(|| Error::RestaurantNotFound(id.clone()))?;

    output::print_restaurant_details(restaurant, output_mode)?;
    Ok(())
}

/// Execute the export command
///
/// Always writes JSONL, whatever the output mode.
pub fn execute_export(app: &App, _args: &ExportArgs) -> Result<()> {
    let stdout = std::io::stdout();
    app.catalog().write_json_lines(stdout.lock())?;
    if let Some(path) = app.catalog_file() {
        tracing::debug!(path = %path.display(), "Exported catalog loaded from file");
    }
    Ok(())
}

/// Restaurants matching the list arguments, evaluating `--open-now` at `now`.
///
/// An unrecognized price tier yields no restaurants.
pub(crate) fn list_restaurants<'a>(
    app: &'a App,
    args: &ListArgs,
    now: Moment,
) -> Vec<&'a Restaurant> {
    let price = match args.price.as_deref() {
        Some(label) => match PriceRange::from_label(label) {
            Some(tier) => Some(tier),
            None => {
                tracing::debug!(price = %label, "Unrecognized price tier, nothing matches");
                return Vec::new();
            }
        },
        None => None,
    };

    let filter = RestaurantFilter {
        price,
        cuisine: args.cuisine.clone(),
        area: args.area.clone(),
        min_rating: args.min_rating,
        text: None,
        open_at: args.open_now.then_some(now),
    };

    app.catalog().list(&filter)
}

/// The moment the open command evaluates: `now`, with the day and time
/// replaced by whichever of `--day`/`--time` were given.
pub(crate) fn resolve_moment(args: &OpenArgs, now: Moment) -> Moment {
    Moment {
        weekday: args.day.unwrap_or(now.weekday),
        hhmm: args.time.unwrap_or(now.hhmm),
    }
}
