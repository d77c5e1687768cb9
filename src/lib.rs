//! trailRewards Library
//!
//! Proximity-based travel rewards engine: a background tracker samples user
//! locations, and a semaphore-gated engine grants rewards for attractions
//! near the places a user has been.

pub mod config;
pub mod domain;
pub mod error;
pub mod geo;
pub mod nearby;
pub mod providers;
pub mod rewards;
pub mod seed;
pub mod service;
pub mod store;
pub mod tracker;

pub use config::Config;
pub use error::{LocationTrackingError, RewardComputationError};
pub use nearby::{NearbyAttraction, NearestAttractionFinder, DEFAULT_NEARBY_COUNT};
pub use rewards::{RewardEngine, RewardEngineConfig};
pub use service::GuideService;
pub use store::UserStore;
pub use tracker::{LocationTracker, TrackerConfig, TrackerState};
