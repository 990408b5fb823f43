//! Listings repository: REST access to the backend `tools` table.
//!
//! The backend exposes the table through a PostgREST-style surface; reads
//! and writes go through `/rest/v1/{table}` authenticated with the project
//! API key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
    models::{NewListing, ToolListing},
};

/// Data-source operations required by the browse session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Fetch the full listing collection, newest first
    async fn fetch_all(&self) -> AppResult<Vec<ToolListing>>;

    /// Create one listing; the backend assigns id and timestamps
    async fn create(&self, new_listing: &NewListing) -> AppResult<ToolListing>;
}

#[derive(Clone)]
pub struct RestListingRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestListingRepository {
    /// Build a repository from the backend settings
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ListingRepository for RestListingRepository {
    async fn fetch_all(&self) -> AppResult<Vec<ToolListing>> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        tracing::debug!("Fetching listings from {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Backend(format!(
                "fetch returned {}: {}",
                status, body
            )));
        }

        let listings: Vec<ToolListing> = serde_json::from_str(&body)?;
        tracing::info!("Fetched {} listings", listings.len());
        Ok(listings)
    }

    async fn create(&self, new_listing: &NewListing) -> AppResult<ToolListing> {
        tracing::debug!("Creating listing '{}'", new_listing.title);

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
            .json(new_listing)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Backend(format!(
                "create returned {}: {}",
                status, body
            )));
        }

        // The representation comes back as a one-element array
        let created: Vec<ToolListing> = serde_json::from_str(&body)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Backend("create returned no representation".to_string()))
    }
}
