//! Session-level services

pub mod browse;

pub use browse::{BrowseSession, LoadState, LOAD_FAILURE_MESSAGE};
