//! Facet vocabulary derivation for filter controls.

use std::collections::BTreeSet;

use crate::models::filter::{ALL_CATEGORIES, ALL_LOCATIONS};
use crate::models::ToolListing;

/// Distinct category values, sorted ascending, prefixed with the "all" label
pub fn derive_categories(listings: &[ToolListing]) -> Vec<String> {
    let distinct: BTreeSet<&str> = listings
        .iter()
        .map(|listing| listing.category.as_str())
        .collect();

    let mut categories = Vec::with_capacity(distinct.len() + 1);
    categories.push(ALL_CATEGORIES.to_string());
    categories.extend(distinct.into_iter().map(String::from));
    categories
}

/// Distinct normalized location tokens, sorted ascending, prefixed with the
/// "all" label
pub fn derive_locations(listings: &[ToolListing]) -> Vec<String> {
    let distinct: BTreeSet<String> = listings
        .iter()
        .map(|listing| location_facet_token(&listing.location).to_string())
        .collect();

    let mut locations = Vec::with_capacity(distinct.len() + 1);
    locations.push(ALL_LOCATIONS.to_string());
    locations.extend(distinct);
    locations
}

/// Extract the short facet token from a free-form location string.
///
/// Split on commas; with at least two parts, take the second-to-last part,
/// trim it, and keep only its final whitespace-delimited word (pulls
/// "Seattle" out of "Downtown Seattle, WA"). With fewer than two parts the
/// whole string is the token. The heuristic mis-trims some address formats;
/// it is kept as-is for compatibility with existing data.
fn location_facet_token(location: &str) -> &str {
    let parts: Vec<&str> = location.split(',').collect();
    if parts.len() >= 2 {
        let city_part = parts[parts.len() - 2].trim();
        city_part
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(city_part)
    } else {
        location
    }
}
