//! ToolShare Client - Community Tool Sharing Marketplace
//!
//! A small consumer binary: loads the live listing collection from the
//! backend and prints the browse view for an optional search query and
//! category given on the command line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolshare_client::{
    config::AppConfig,
    models::filter::ALL_CATEGORIES,
    models::{FilterChange, Selection},
    repository::RestListingRepository,
    services::BrowseSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("toolshare_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ToolShare client v{}", env!("CARGO_PKG_VERSION"));

    // Create the repository and a browse session
    let repository = RestListingRepository::new(&config.backend)?;
    let mut session = BrowseSession::new(repository);

    session.load().await?;

    // Optional command line view: [query] [category]
    let mut args = std::env::args().skip(1);
    if let Some(query) = args.next() {
        session.set_search_query(&query);
    }
    if let Some(category) = args.next() {
        session.update_filter(FilterChange::Category(Selection::from_control(
            &category,
            ALL_CATEGORIES,
        )));
    }

    tracing::info!(
        "{} of {} listings match the current view",
        session.match_count(),
        session.total_count()
    );
    tracing::info!("Categories: {}", session.categories().join(", "));
    tracing::info!("Locations: {}", session.locations().join(", "));

    for listing in session.results() {
        println!(
            "{:<28} {:>7.2}/day  {:<20} {}",
            listing.title, listing.price, listing.location, listing.condition
        );
    }

    Ok(())
}
