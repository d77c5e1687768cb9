//! Error handling module
//!
//! Domain-level failure types for the reward engine and the location
//! tracker. Both keep the underlying cause attached so callers can log the
//! full chain.

use crate::providers::ProviderError;

/// Failure while computing rewards for a user.
#[derive(Debug, thiserror::Error)]
pub enum RewardComputationError {
    #[error("failed to fetch the attraction catalog")]
    Catalog(#[source] ProviderError),

    #[error("catalog fetch task did not complete")]
    CatalogTask(#[from] tokio::task::JoinError),

    #[error("failed to resolve reward points for attraction '{attraction}'")]
    RewardPoints {
        attraction: String,
        #[source]
        source: ProviderError,
    },
}

/// Failure while tracking a user's location.
#[derive(Debug, thiserror::Error)]
pub enum LocationTrackingError {
    #[error("failed to sample a location for user '{user}'")]
    Sample {
        user: String,
        #[source]
        source: ProviderError,
    },

    #[error("reward computation failed after recording the location")]
    Rewards(#[from] RewardComputationError),

    #[error("tracking task did not complete")]
    TrackingTask(#[from] tokio::task::JoinError),
}

impl RewardComputationError {
    pub fn reward_points(attraction: impl Into<String>, source: ProviderError) -> Self {
        Self::RewardPoints {
            attraction: attraction.into(),
            source,
        }
    }
}

impl LocationTrackingError {
    pub fn sample(user: impl Into<String>, source: ProviderError) -> Self {
        Self::Sample {
            user: user.into(),
            source,
        }
    }
}
