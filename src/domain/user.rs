//! User entity
//!
//! Users own their location history and reward list. Both sequences are
//! append-only behind a write lock, so the tracker loop and direct callers
//! can append concurrently without corrupting them. The reward list enforces
//! its own invariant: one reward per attraction name.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{UserReward, VisitedLocation};

/// Trip and proximity preferences carried per user.
///
/// The trip parameters are consumed by the external trip-pricing service;
/// the engine itself only reads the proximity preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Radius in miles the user considers "nearby". Defaults to effectively
    /// unlimited.
    pub attraction_proximity_miles: f64,
    pub trip_duration_days: u32,
    pub ticket_quantity: u32,
    pub number_of_adults: u32,
    pub number_of_children: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            attraction_proximity_miles: f64::MAX,
            trip_duration_days: 1,
            ticket_quantity: 1,
            number_of_adults: 1,
            number_of_children: 0,
        }
    }
}

/// A registered user.
///
/// Owned by the `UserStore` as `Arc<User>`; every component mutates it only
/// through the append operations below plus [`User::clear_visited_locations`].
#[derive(Debug)]
pub struct User {
    id: Uuid,
    name: String,
    phone_number: String,
    email_address: String,
    visited_locations: RwLock<Vec<VisitedLocation>>,
    rewards: RwLock<Vec<UserReward>>,
    preferences: RwLock<UserPreferences>,
}

impl User {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
            visited_locations: RwLock::new(Vec::new()),
            rewards: RwLock::new(Vec::new()),
            preferences: RwLock::new(UserPreferences::default()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Append one sighting to the location history.
    pub async fn add_visited_location(&self, visited: VisitedLocation) {
        let mut locations = self.visited_locations.write().await;
        locations.push(visited);
        tracing::debug!(user = %self.name, count = locations.len(), "visited location recorded");
    }

    /// Snapshot of the location history, oldest first.
    pub async fn visited_locations(&self) -> Vec<VisitedLocation> {
        self.visited_locations.read().await.clone()
    }

    /// Most recent sighting, if any.
    pub async fn last_visited_location(&self) -> Option<VisitedLocation> {
        self.visited_locations.read().await.last().cloned()
    }

    /// Reset the location history to empty. Rewards are untouched.
    pub async fn clear_visited_locations(&self) {
        self.visited_locations.write().await.clear();
        tracing::debug!(user = %self.name, "visited locations cleared");
    }

    /// Append a reward unless one already exists for the same attraction
    /// name. Returns whether the reward was added.
    ///
    /// The check and the push happen under one write lock, so concurrent
    /// callers cannot both insert the same attraction.
    pub async fn add_reward(&self, reward: UserReward) -> bool {
        let mut rewards = self.rewards.write().await;
        let duplicate = rewards
            .iter()
            .any(|existing| existing.attraction.name == reward.attraction.name);
        if duplicate {
            tracing::debug!(
                user = %self.name,
                attraction = %reward.attraction.name,
                "reward skipped, attraction already rewarded"
            );
            return false;
        }
        tracing::debug!(
            user = %self.name,
            attraction = %reward.attraction.name,
            points = reward.reward_points,
            "reward added"
        );
        rewards.push(reward);
        true
    }

    /// Snapshot of the reward list, in grant order.
    pub async fn rewards(&self) -> Vec<UserReward> {
        self.rewards.read().await.clone()
    }

    pub async fn preferences(&self) -> UserPreferences {
        self.preferences.read().await.clone()
    }

    pub async fn set_preferences(&self, preferences: UserPreferences) {
        *self.preferences.write().await = preferences;
    }
}
