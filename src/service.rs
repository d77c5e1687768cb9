//! Guide service
//!
//! Facade over the engine, finder, and providers exposing the operations the
//! API layer consumes: track a user, query their location and rewards, rank
//! nearby attractions, and register users.

use std::sync::Arc;

use crate::domain::{Location, User, UserReward, VisitedLocation};
use crate::error::{LocationTrackingError, RewardComputationError};
use crate::nearby::{NearbyAttraction, NearestAttractionFinder, DEFAULT_NEARBY_COUNT};
use crate::providers::LocationProvider;
use crate::rewards::RewardEngine;
use crate::store::UserStore;

pub struct GuideService {
    store: Arc<UserStore>,
    location_provider: Arc<dyn LocationProvider>,
    reward_engine: Arc<RewardEngine>,
    finder: NearestAttractionFinder,
}

impl GuideService {
    pub fn new(
        store: Arc<UserStore>,
        location_provider: Arc<dyn LocationProvider>,
        reward_engine: Arc<RewardEngine>,
        finder: NearestAttractionFinder,
    ) -> Self {
        Self {
            store,
            location_provider,
            reward_engine,
            finder,
        }
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    pub fn reward_engine(&self) -> &Arc<RewardEngine> {
        &self.reward_engine
    }

    /// Sample a fresh location for the user, record it, and recompute
    /// rewards. Returns the newly recorded location.
    pub async fn track_location(
        &self,
        user: &User,
    ) -> Result<VisitedLocation, LocationTrackingError> {
        let visited = self
            .location_provider
            .sample(user.id())
            .await
            .map_err(|source| LocationTrackingError::sample(user.name(), source))?;
        user.add_visited_location(visited.clone()).await;
        self.reward_engine.calculate_rewards(user).await?;
        Ok(visited)
    }

    /// The user's last recorded location, tracking them now if they have no
    /// history yet.
    pub async fn user_location(
        &self,
        user: &User,
    ) -> Result<VisitedLocation, LocationTrackingError> {
        match user.last_visited_location().await {
            Some(visited) => Ok(visited),
            None => self.track_location(user).await,
        }
    }

    /// The rewards granted to the user so far.
    pub async fn rewards_of(&self, user: &User) -> Vec<UserReward> {
        user.rewards().await
    }

    /// The closest attractions to `location`, annotated with reward points
    /// for `user`.
    pub async fn nearest_attractions(
        &self,
        location: Location,
        user: &User,
    ) -> Result<Vec<NearbyAttraction>, RewardComputationError> {
        self.finder
            .nearest(location, user, DEFAULT_NEARBY_COUNT)
            .await
    }

    /// Register a user. The first registration for a name wins.
    pub fn add_user(&self, user: Arc<User>) -> bool {
        self.store.put(user)
    }

    pub fn user(&self, name: &str) -> Option<Arc<User>> {
        self.store.get(name)
    }

    pub fn all_users(&self) -> Vec<Arc<User>> {
        self.store.all()
    }
}
