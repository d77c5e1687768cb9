//! Collaborator ports
//!
//! Async traits for the external services the engine depends on: the
//! attraction catalog, the reward-points oracle, and the GPS location
//! provider. Components hold them as `Arc<dyn …>` so deployments and tests
//! can swap implementations freely.

pub mod simulated;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Attraction, VisitedLocation};

pub use simulated::{SimulatedAttractionCatalog, SimulatedLocationProvider, SimulatedRewardsOracle};

/// Failure surfaced by an external collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("unknown user id: {0}")]
    UnknownUser(Uuid),
}

/// Source of the static points-of-interest list.
///
/// May be slow. The list is assumed stable within one call but may change
/// between calls.
#[async_trait]
pub trait AttractionCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Attraction>, ProviderError>;
}

/// Resolves the point value of an attraction for a given user.
///
/// The engine assumes the value is stable per (attraction, user) pair.
#[async_trait]
pub trait RewardPointsOracle: Send + Sync {
    async fn points(&self, attraction_id: Uuid, user_id: Uuid) -> Result<i32, ProviderError>;
}

/// Samples a fresh location for a user.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn sample(&self, user_id: Uuid) -> Result<VisitedLocation, ProviderError>;
}
