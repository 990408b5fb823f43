//! Data models for ToolShare

pub mod filter;
pub mod listing;

// Re-export commonly used types
pub use filter::{ConditionFilter, FilterChange, FilterOptions, Selection};
pub use listing::{Condition, NewListing, ToolListing};
