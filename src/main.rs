//! trailRewards - proximity-based travel rewards engine
//!
//! Runs the engine standalone against simulated GPS and rewards services:
//! seeds a synthetic user population, starts the background location
//! tracker, and shuts down cleanly on Ctrl+C or SIGTERM.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trail_rewards::nearby::NearestAttractionFinder;
use trail_rewards::providers::{
    AttractionCatalog, LocationProvider, RewardPointsOracle, SimulatedAttractionCatalog,
    SimulatedLocationProvider, SimulatedRewardsOracle,
};
use trail_rewards::rewards::RewardEngine;
use trail_rewards::seed;
use trail_rewards::service::GuideService;
use trail_rewards::store::UserStore;
use trail_rewards::tracker::LocationTracker;
use trail_rewards::Config;

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trail_rewards=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting trailRewards engine");

    let store = Arc::new(UserStore::new());
    seed::seed_internal_users(&store, config.internal_user_count).await;
    tracing::info!(users = store.len(), "Seeded internal users");

    let catalog: Arc<dyn AttractionCatalog> = Arc::new(SimulatedAttractionCatalog::new());
    let oracle: Arc<dyn RewardPointsOracle> = Arc::new(SimulatedRewardsOracle::new());
    let location_provider: Arc<dyn LocationProvider> = Arc::new(SimulatedLocationProvider::new());

    let engine = Arc::new(RewardEngine::new(
        Arc::clone(&catalog),
        Arc::clone(&oracle),
        config.reward_engine_config(),
    ));
    let finder = NearestAttractionFinder::new(Arc::clone(&catalog), Arc::clone(&oracle));
    let service = Arc::new(GuideService::new(
        Arc::clone(&store),
        location_provider,
        engine,
        finder,
    ));

    let tracker = LocationTracker::start(Arc::clone(&service), config.tracker_config());
    tracing::info!("Location tracker running");

    shutdown_signal().await;

    tracker.stop();
    tracker.wait_until_stopped().await;
    tracing::info!("Tracker stopped. Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
