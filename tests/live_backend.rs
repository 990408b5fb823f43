//! Live backend smoke tests.
//!
//! These talk to a real backend project: set SUPABASE_URL and
//! SUPABASE_ANON_KEY (a project with a `tools` table) before running.

use toolshare_client::{
    config::BackendConfig,
    repository::{ListingRepository, RestListingRepository},
    services::{BrowseSession, LoadState},
};

fn backend_from_env() -> BackendConfig {
    BackendConfig {
        base_url: std::env::var("SUPABASE_URL").expect("SUPABASE_URL not set"),
        api_key: std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY not set"),
        table: "tools".to_string(),
    }
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_fetch_all_returns_newest_first() {
    let repository = RestListingRepository::new(&backend_from_env()).expect("client build");

    let listings = repository.fetch_all().await.expect("fetch failed");

    for pair in listings.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
#[ignore]
async fn test_session_loads_live_collection() {
    let repository = RestListingRepository::new(&backend_from_env()).expect("client build");
    let mut session = BrowseSession::new(repository);

    session.load().await.expect("load failed");

    assert_eq!(*session.state(), LoadState::Ready);
    assert_eq!(session.categories()[0], "All Categories");
    assert_eq!(session.locations()[0], "All Locations");
    assert!(session.match_count() <= session.total_count());
}
