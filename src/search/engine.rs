//! The filter engine: a pure function from a listing snapshot and the
//! current query state to the visible result sequence.

use crate::models::{ConditionFilter, FilterOptions, Selection, ToolListing};

/// Apply the free-text query and structured filters to a listing snapshot.
///
/// Order-preserving: results keep the relative order of `listings`. Every
/// predicate must pass for a listing to be included. Recomputation is total;
/// callers re-invoke on every input change.
pub fn filter_listings(
    listings: &[ToolListing],
    query: &str,
    options: &FilterOptions,
) -> Vec<ToolListing> {
    let query = query.to_lowercase();

    listings
        .iter()
        .filter(|listing| matches(listing, &query, options))
        .cloned()
        .collect()
}

/// `query` must already be lowercased; the empty string disables the text
/// predicate entirely (it never means "match nothing").
fn matches(listing: &ToolListing, query: &str, options: &FilterOptions) -> bool {
    if !query.is_empty() {
        let text_hit = listing.title.to_lowercase().contains(query)
            || listing.description.to_lowercase().contains(query)
            || listing.owner.to_lowercase().contains(query)
            || listing
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query));
        if !text_hit {
            return false;
        }
    }

    // Category requires exact, case-sensitive equality
    if let Selection::Specific(category) = &options.category {
        if listing.category != *category {
            return false;
        }
    }

    // Location is a lowercased substring test, so a facet token like
    // "Seattle" still matches "Downtown Seattle, WA"
    if let Selection::Specific(location) = &options.location {
        if !listing
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }

    // Inclusive bound: a listing priced exactly at the ceiling stays in
    if listing.price > options.max_price {
        return false;
    }

    if let ConditionFilter::Is(condition) = options.condition {
        if listing.condition != condition {
            return false;
        }
    }

    // Availability is reserved and never filtered
    true
}
