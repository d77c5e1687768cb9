//! Reward engine
//!
//! Grants rewards for attractions near a user's recorded locations. Whole
//! calls are admitted through a counting semaphore so a burst of tracking
//! cycles cannot overwhelm the upstream catalog and oracle.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Attraction, Location, User, UserReward};
use crate::error::RewardComputationError;
use crate::geo;
use crate::providers::{AttractionCatalog, RewardPointsOracle};

/// Configuration for the reward engine.
#[derive(Debug, Clone)]
pub struct RewardEngineConfig {
    /// Radius in miles within which a visited location makes an attraction
    /// reward-eligible.
    pub proximity_buffer_miles: f64,
    /// Wider radius used only by the standalone nearby predicate. Never
    /// feeds reward eligibility.
    pub attraction_proximity_range_miles: f64,
    /// Maximum number of reward computations in flight at once.
    pub concurrency_limit: usize,
}

impl Default for RewardEngineConfig {
    fn default() -> Self {
        Self {
            proximity_buffer_miles: 10.0,
            attraction_proximity_range_miles: 200.0,
            concurrency_limit: 100,
        }
    }
}

/// Computes and appends rewards for users.
pub struct RewardEngine {
    catalog: Arc<dyn AttractionCatalog>,
    oracle: Arc<dyn RewardPointsOracle>,
    permits: Semaphore,
    config: RewardEngineConfig,
}

impl RewardEngine {
    pub fn new(
        catalog: Arc<dyn AttractionCatalog>,
        oracle: Arc<dyn RewardPointsOracle>,
        config: RewardEngineConfig,
    ) -> Self {
        let permits = Semaphore::new(config.concurrency_limit);
        Self {
            catalog,
            oracle,
            permits,
            config,
        }
    }

    pub fn config(&self) -> &RewardEngineConfig {
        &self.config
    }

    /// Compute rewards for every (visited location, attraction) pair within
    /// the proximity buffer that the user has not been rewarded for yet.
    ///
    /// Suspends while the admission semaphore is exhausted. Rewards are
    /// appended as they are found and the call aborts on the first
    /// collaborator failure, so a failed call may leave the rewards it had
    /// already appended; it never appends a duplicate attraction name.
    pub async fn calculate_rewards(&self, user: &User) -> Result<(), RewardComputationError> {
        // Permit is held for the whole call and released on every exit path
        // when it drops. The semaphore is never closed.
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("admission semaphore closed");

        let catalog = Arc::clone(&self.catalog);
        let fetch = tokio::spawn(async move { catalog.list().await });

        let attractions = fetch.await?.map_err(RewardComputationError::Catalog)?;

        let visited_locations = user.visited_locations().await;
        let mut rewarded_names: HashSet<String> = user
            .rewards()
            .await
            .into_iter()
            .map(|reward| reward.attraction.name)
            .collect();

        for visited in &visited_locations {
            for attraction in &attractions {
                if rewarded_names.contains(&attraction.name) {
                    continue;
                }
                if !self.near_attraction(attraction, visited.location) {
                    continue;
                }
                let points = self
                    .oracle
                    .points(attraction.id, user.id())
                    .await
                    .map_err(|source| {
                        RewardComputationError::reward_points(attraction.name.as_str(), source)
                    })?;
                user.add_reward(UserReward::new(
                    visited.clone(),
                    attraction.clone(),
                    points,
                ))
                .await;
                rewarded_names.insert(attraction.name.clone());
            }
        }

        tracing::debug!(
            user = user.name(),
            rewards = rewarded_names.len(),
            "reward computation finished"
        );
        Ok(())
    }

    /// Whether an attraction lies within the standalone nearby range of a
    /// location. Boundary inclusive.
    pub fn is_within_attraction_proximity(
        &self,
        attraction: &Attraction,
        location: Location,
    ) -> bool {
        geo::distance_miles(attraction.location, location)
            <= self.config.attraction_proximity_range_miles
    }

    fn near_attraction(&self, attraction: &Attraction, location: Location) -> bool {
        geo::distance_miles(attraction.location, location) <= self.config.proximity_buffer_miles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct EmptyCatalog;

    #[async_trait]
    impl AttractionCatalog for EmptyCatalog {
        async fn list(&self) -> Result<Vec<Attraction>, ProviderError> {
            Ok(Vec::new())
        }
    }

    struct FixedOracle;

    #[async_trait]
    impl RewardPointsOracle for FixedOracle {
        async fn points(&self, _attraction_id: Uuid, _user_id: Uuid) -> Result<i32, ProviderError> {
            Ok(42)
        }
    }

    fn engine(config: RewardEngineConfig) -> RewardEngine {
        RewardEngine::new(Arc::new(EmptyCatalog), Arc::new(FixedOracle), config)
    }

    #[test]
    fn default_config_keeps_the_two_radii_distinct() {
        let config = RewardEngineConfig::default();
        assert_eq!(config.proximity_buffer_miles, 10.0);
        assert_eq!(config.attraction_proximity_range_miles, 200.0);
        assert_eq!(config.concurrency_limit, 100);
    }

    #[tokio::test]
    async fn attraction_proximity_is_boundary_inclusive() {
        let engine = engine(RewardEngineConfig {
            attraction_proximity_range_miles: geo::distance_miles(
                Location::new(0.0, 0.0),
                Location::new(0.0, 1.0),
            ),
            ..RewardEngineConfig::default()
        });
        let attraction = Attraction::new("Equator Mark", "Nowhere", "NA", 0.0, 0.0);

        assert!(engine.is_within_attraction_proximity(&attraction, Location::new(0.0, 1.0)));
        assert!(!engine.is_within_attraction_proximity(&attraction, Location::new(0.0, 1.01)));
    }

    #[tokio::test]
    async fn proximity_range_does_not_leak_into_reward_eligibility() {
        // An attraction 50 miles away is inside the 200 mile nearby range
        // but outside the 10 mile reward buffer.
        let engine = engine(RewardEngineConfig::default());
        let attraction = Attraction::new("Equator Mark", "Nowhere", "NA", 0.0, 0.0);
        let fifty_miles_away = Location::new(0.0, 50.0 / 69.0);

        assert!(engine.is_within_attraction_proximity(&attraction, fifty_miles_away));
        assert!(!engine.near_attraction(&attraction, fifty_miles_away));
    }

    #[tokio::test]
    async fn empty_catalog_yields_no_rewards() {
        let engine = engine(RewardEngineConfig::default());
        let user = User::new(Uuid::new_v4(), "jon", "000", "jon@trailrewards.com");
        user.add_visited_location(crate::domain::VisitedLocation::new(
            user.id(),
            Location::new(0.0, 0.0),
            chrono::Utc::now(),
        ))
        .await;

        engine.calculate_rewards(&user).await.unwrap();

        assert!(user.rewards().await.is_empty());
    }
}
