//! Listing search: filter engine and facet derivation
//!
//! This module holds the pure in-memory pipeline that turns a listing
//! snapshot and the current query state into the visible result set and
//! the filter control vocabularies.

pub mod engine;
pub mod facets;

pub use engine::filter_listings;
pub use facets::{derive_categories, derive_locations};
