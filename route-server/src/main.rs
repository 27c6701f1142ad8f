use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::airports::us_airports;
use route_server::cache::{CacheConfig, CachedOfferProvider};
use route_server::duffel::{DuffelClient, DuffelConfig, MockDuffelClient};
use route_server::ground::{FallbackEstimator, default_fare_table};
use route_server::planner::SearchConfig;
use route_server::places::{PlacesClient, PlacesConfig};
use route_server::web::{AppState, OfferBackend, create_router};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Read an optional environment variable, treating blank as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    // Duffel client, shared by the proxy and live searches
    let duffel = match env_var("DUFFEL_API_KEY") {
        Some(key) => {
            let mut config = DuffelConfig::new(key);
            if let Some(url) = env_var("DUFFEL_BASE_URL") {
                config = config.with_base_url(url);
            }
            info!(base_url = %config.base_url, "Duffel client configured");
            Some(DuffelClient::new(config)?)
        }
        None => {
            warn!("DUFFEL_API_KEY not set. Proxy requests will fail and searches find no flights.");
            None
        }
    };

    let offers = match (env_var("MOCK_OFFERS_DIR"), &duffel) {
        (Some(dir), _) => {
            let mock = MockDuffelClient::from_dir(&dir)?;
            info!(dir = %dir, pairs = mock.pairs().len(), "Serving flight offers from fixtures");
            OfferBackend::Mock(mock)
        }
        (None, Some(client)) => {
            OfferBackend::Live(CachedOfferProvider::new(client.clone(), &CacheConfig::default()))
        }
        (None, None) => OfferBackend::Unconfigured,
    };

    let finder = us_airports();
    let fares = default_fare_table();
    let unknown_airport_leg = fares.default_leg();
    let ground = FallbackEstimator::new(fares, unknown_airport_leg);
    let search_config = SearchConfig::default();
    info!(
        airport_rules = finder.rule_count(),
        max_results = search_config.max_results,
        max_concurrent_pairs = search_config.max_concurrent_pairs,
        "Planner configured"
    );

    let mut state = AppState::new(finder, ground, offers, search_config);
    if let Some(client) = duffel {
        state = state.with_duffel(client);
    }
    match env_var("GOOGLE_PLACES_API_KEY") {
        Some(key) => state = state.with_places(PlacesClient::new(PlacesConfig::new(key))?),
        None => warn!("GOOGLE_PLACES_API_KEY not set. Autocomplete returns no suggestions."),
    }

    let app = create_router(state);

    let addr: SocketAddr = env_var("BIND_ADDR")
        .as_deref()
        .unwrap_or(DEFAULT_BIND_ADDR)
        .parse()?;
    info!(%addr, "Route planner listening");
    info!("  GET  /health                   - Health check");
    info!("  POST /api/duffel               - Offer request proxy");
    info!("  POST /api/search               - Door-to-door itinerary search");
    info!("  GET  /api/places/autocomplete  - Address suggestions");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
