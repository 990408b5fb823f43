//! ToolShare Community Tool Sharing Marketplace
//!
//! A Rust implementation of the ToolShare client core: the in-memory
//! search/filter/listing engine, the browse session that owns its state,
//! and the REST repository for the backend tools table.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
