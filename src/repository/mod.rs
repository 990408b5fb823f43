//! Repository layer for backend data access

pub mod listings;

pub use listings::{ListingRepository, RestListingRepository};
