//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::rewards::RewardEngineConfig;
use crate::seed::DEFAULT_INTERNAL_USER_COUNT;
use crate::tracker::TrackerConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Radius (miles) within which a visited location earns a reward
    pub proximity_buffer_miles: f64,

    /// Radius (miles) for the standalone nearby-attraction predicate
    pub attraction_proximity_range_miles: f64,

    /// Maximum concurrent reward computations
    pub reward_concurrency_limit: usize,

    /// Seconds between tracker cycles
    pub tracker_polling_interval_secs: u64,

    /// Maximum users tracked concurrently within one cycle
    pub tracker_worker_limit: usize,

    /// Synthetic users to seed at startup
    pub internal_user_count: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let proximity_buffer_miles = env::var("PROXIMITY_BUFFER_MILES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PROXIMITY_BUFFER_MILES"))?;

        let attraction_proximity_range_miles = env::var("ATTRACTION_PROXIMITY_RANGE_MILES")
            .unwrap_or_else(|_| "200".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ATTRACTION_PROXIMITY_RANGE_MILES"))?;

        let reward_concurrency_limit = env::var("REWARD_CONCURRENCY_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("REWARD_CONCURRENCY_LIMIT"))?;

        let tracker_polling_interval_secs = env::var("TRACKER_POLLING_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TRACKER_POLLING_INTERVAL_SECS"))?;

        let tracker_worker_limit = env::var("TRACKER_WORKER_LIMIT")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TRACKER_WORKER_LIMIT"))?;

        let internal_user_count = env::var("INTERNAL_USER_COUNT")
            .unwrap_or_else(|_| DEFAULT_INTERNAL_USER_COUNT.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("INTERNAL_USER_COUNT"))?;

        Ok(Self {
            proximity_buffer_miles,
            attraction_proximity_range_miles,
            reward_concurrency_limit,
            tracker_polling_interval_secs,
            tracker_worker_limit,
            internal_user_count,
        })
    }

    pub fn reward_engine_config(&self) -> RewardEngineConfig {
        RewardEngineConfig {
            proximity_buffer_miles: self.proximity_buffer_miles,
            attraction_proximity_range_miles: self.attraction_proximity_range_miles,
            concurrency_limit: self.reward_concurrency_limit,
        }
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            polling_interval: Duration::from_secs(self.tracker_polling_interval_secs),
            worker_limit: self.tracker_worker_limit,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
