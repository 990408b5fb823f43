//! Browse session: the stateful facade over the listing store, the filter
//! state, and the derived outputs.
//!
//! All recomputation is explicit: every mutating operation bumps the
//! version of the input it changed and re-runs the filter engine and facet
//! derivation before returning, so readers always observe outputs consistent
//! with the inputs. Readers never trigger computation.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{FilterChange, FilterOptions, NewListing, ToolListing},
    repository::ListingRepository,
    search,
};

/// User-facing message recorded when the initial fetch fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load tools. Please try again later.";

/// Load state of the listing store. Loading and Failed are distinct from an
/// empty result set and must be rendered as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The initial fetch has not resolved yet
    Loading,
    /// The fetch resolved; the store holds whatever the backend returned
    Ready,
    /// The fetch failed and the store is empty
    Failed(String),
}

/// One user's browsing session over the tool listings
pub struct BrowseSession<R: ListingRepository> {
    repository: R,
    listings: Vec<ToolListing>,
    state: LoadState,
    query: String,
    filters: FilterOptions,
    collection_version: u64,
    filter_version: u64,
    // cached outputs and the version pair they were computed from
    computed_for: (u64, u64),
    results: Vec<ToolListing>,
    categories: Vec<String>,
    locations: Vec<String>,
}

impl<R: ListingRepository> BrowseSession<R> {
    /// Create a session with an empty store, default filters and Loading state
    pub fn new(repository: R) -> Self {
        let mut session = Self {
            repository,
            listings: Vec::new(),
            state: LoadState::Loading,
            query: String::new(),
            filters: FilterOptions::default(),
            collection_version: 0,
            filter_version: 0,
            computed_for: (0, 0),
            results: Vec::new(),
            categories: Vec::new(),
            locations: Vec::new(),
        };
        session.recompute();
        session
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Fetch the full collection from the backend, replacing the store.
    /// A retry is simply a fresh call; there is no automatic retry policy.
    pub async fn load(&mut self) -> AppResult<()> {
        self.state = LoadState::Loading;

        match self.repository.fetch_all().await {
            Ok(listings) => {
                tracing::info!("Loaded {} listings", listings.len());
                self.listings = listings;
                self.state = LoadState::Ready;
                self.collection_changed();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load listings: {}", e);
                self.listings.clear();
                self.state = LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string());
                self.collection_changed();
                Err(e)
            }
        }
    }

    /// Validate and submit a new listing. On success the created record is
    /// prepended so the store stays newest first; on failure the session is
    /// left untouched.
    pub async fn add_listing(&mut self, new_listing: NewListing) -> AppResult<ToolListing> {
        new_listing
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.repository.create(&new_listing).await?;
        tracing::info!("Created listing {} '{}'", created.id, created.title);

        self.listings.insert(0, created.clone());
        self.collection_changed();
        Ok(created)
    }

    /// Replace the free-text search query
    pub fn set_search_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filters_changed();
    }

    /// Set exactly one filter field, leaving the others untouched
    pub fn update_filter(&mut self, change: FilterChange) {
        self.filters.apply(change);
        self.filters_changed();
    }

    /// Reset the query and every filter field to defaults in one step
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.filters = FilterOptions::default();
        self.filters_changed();
    }

    // =========================================================================
    // READERS
    // =========================================================================

    /// Filtered results, in the order the backend delivered them
    pub fn results(&self) -> &[ToolListing] {
        &self.results
    }

    /// Number of listings passing the current filters
    pub fn match_count(&self) -> usize {
        self.results.len()
    }

    /// Number of listings in the store, ignoring filters
    pub fn total_count(&self) -> usize {
        self.listings.len()
    }

    /// Category facet vocabulary, "All Categories" first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Location facet vocabulary, "All Locations" first
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Current free-text query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current structured filter values, for control binding
    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Current load state
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Version pair (collection, filters) the cached outputs were computed
    /// from; always equal to the current versions between mutations
    pub fn computed_versions(&self) -> (u64, u64) {
        self.computed_for
    }

    // =========================================================================
    // RECOMPUTATION
    // =========================================================================

    fn collection_changed(&mut self) {
        self.collection_version += 1;
        self.recompute();
    }

    fn filters_changed(&mut self) {
        self.filter_version += 1;
        self.recompute();
    }

    /// Re-run the filter engine and facet derivation against the current
    /// inputs. Total and unconditional; called by every mutation.
    fn recompute(&mut self) {
        self.results = search::filter_listings(&self.listings, &self.query, &self.filters);
        self.categories = search::derive_categories(&self.listings);
        self.locations = search::derive_locations(&self.listings);
        self.computed_for = (self.collection_version, self.filter_version);

        tracing::debug!(
            "Recomputed view: {}/{} listings match (collection v{}, filters v{})",
            self.results.len(),
            self.listings.len(),
            self.collection_version,
            self.filter_version
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;
    use crate::repository::listings::MockListingRepository;
    use chrono::Utc;

    fn listing(title: &str, category: &str, price: f64) -> ToolListing {
        ToolListing {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            url: None,
            image: None,
            tags: Vec::new(),
            owner: "Sam".to_string(),
            location: "Austin, TX".to_string(),
            availability: "Weekends".to_string(),
            condition: Condition::Good,
            price,
            contact_email: "sam@example.com".to_string(),
            contact_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_listing(title: &str) -> NewListing {
        NewListing {
            title: title.to_string(),
            description: String::new(),
            category: "Power Tools".to_string(),
            url: None,
            image: None,
            tags: Vec::new(),
            owner: "Sam".to_string(),
            location: "Austin, TX".to_string(),
            availability: "Weekends".to_string(),
            condition: Condition::Good,
            price: 10.0,
            contact_email: "sam@example.com".to_string(),
            contact_phone: None,
        }
    }

    #[test]
    fn test_new_session_starts_loading_with_sentinel_facets() {
        let session = BrowseSession::new(MockListingRepository::new());

        assert_eq!(*session.state(), LoadState::Loading);
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.categories(), ["All Categories"]);
        assert_eq!(session.locations(), ["All Locations"]);
    }

    #[test]
    fn test_failed_load_is_distinct_from_empty() {
        let mut repository = MockListingRepository::new();
        repository
            .expect_fetch_all()
            .returning(|| Err(AppError::Backend("fetch returned 500".to_string())));

        let mut session = BrowseSession::new(repository);
        let result = tokio_test::block_on(session.load());

        assert!(result.is_err());
        assert_eq!(
            *session.state(),
            LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.match_count(), 0);
    }

    #[test]
    fn test_retry_after_failure_recovers() {
        let mut repository = MockListingRepository::new();
        let mut attempts = 0;
        repository.expect_fetch_all().returning(move || {
            attempts += 1;
            if attempts == 1 {
                Err(AppError::Backend("fetch returned 503".to_string()))
            } else {
                Ok(vec![listing("Drill", "Power Tools", 20.0)])
            }
        });

        let mut session = BrowseSession::new(repository);
        assert!(tokio_test::block_on(session.load()).is_err());
        assert!(tokio_test::block_on(session.load()).is_ok());

        assert_eq!(*session.state(), LoadState::Ready);
        assert_eq!(session.total_count(), 1);
    }

    #[test]
    fn test_invalid_listing_is_rejected_before_any_network_call() {
        let mut repository = MockListingRepository::new();
        repository.expect_create().never();

        let mut session = BrowseSession::new(repository);
        let mut invalid = new_listing("Sander");
        invalid.contact_email = "not-an-email".to_string();

        let result = tokio_test::block_on(session.add_listing(invalid));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.total_count(), 0);
    }

    #[test]
    fn test_mutations_keep_cached_versions_current() {
        let mut repository = MockListingRepository::new();
        repository
            .expect_fetch_all()
            .returning(|| Ok(vec![listing("Drill", "Power Tools", 20.0)]));

        let mut session = BrowseSession::new(repository);
        assert_eq!(session.computed_versions(), (0, 0));

        tokio_test::block_on(session.load()).unwrap();
        assert_eq!(session.computed_versions(), (1, 0));

        session.set_search_query("drill");
        assert_eq!(session.computed_versions(), (1, 1));

        session.clear_filters();
        assert_eq!(session.computed_versions(), (1, 2));
    }
}
