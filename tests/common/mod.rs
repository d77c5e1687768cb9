//! Common test utilities
//!
//! Collaborator doubles shared by the integration tests: fixed catalogs,
//! scripted failures, and an instrumented oracle for concurrency assertions.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use trail_rewards::domain::{Attraction, Location, User, VisitedLocation};
use trail_rewards::providers::{
    AttractionCatalog, LocationProvider, ProviderError, RewardPointsOracle,
};

/// Catalog returning a fixed attraction list.
pub struct FixedCatalog {
    attractions: Vec<Attraction>,
}

impl FixedCatalog {
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions }
    }

    /// A single attraction at the origin.
    pub fn single_at_origin() -> (Self, Attraction) {
        let attraction = Attraction::new("Origin Monument", "Null Island", "NA", 0.0, 0.0);
        (Self::new(vec![attraction.clone()]), attraction)
    }
}

#[async_trait]
impl AttractionCatalog for FixedCatalog {
    async fn list(&self) -> Result<Vec<Attraction>, ProviderError> {
        Ok(self.attractions.clone())
    }
}

/// Catalog that always fails.
pub struct FailingCatalog;

#[async_trait]
impl AttractionCatalog for FailingCatalog {
    async fn list(&self) -> Result<Vec<Attraction>, ProviderError> {
        Err(ProviderError::Unavailable("catalog offline".to_string()))
    }
}

/// Oracle returning fixed points while recording call concurrency.
pub struct CountingOracle {
    points: i32,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingOracle {
    pub fn new(points: i32, delay: Duration) -> Self {
        Self {
            points,
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RewardPointsOracle for CountingOracle {
    async fn points(&self, _attraction_id: Uuid, _user_id: Uuid) -> Result<i32, ProviderError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(self.points)
    }
}

/// Oracle that fails for one specific attraction and succeeds otherwise.
pub struct FailingForOracle {
    fail_for: Uuid,
    points: i32,
}

impl FailingForOracle {
    pub fn new(fail_for: Uuid, points: i32) -> Self {
        Self { fail_for, points }
    }
}

#[async_trait]
impl RewardPointsOracle for FailingForOracle {
    async fn points(&self, attraction_id: Uuid, _user_id: Uuid) -> Result<i32, ProviderError> {
        if attraction_id == self.fail_for {
            Err(ProviderError::Unavailable("oracle offline".to_string()))
        } else {
            Ok(self.points)
        }
    }
}

/// Provider sampling the same fixed location for everyone.
pub struct FixedLocationProvider {
    location: Location,
}

impl FixedLocationProvider {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn sample(&self, user_id: Uuid) -> Result<VisitedLocation, ProviderError> {
        Ok(VisitedLocation::new(user_id, self.location, Utc::now()))
    }
}

/// Provider that always fails.
pub struct FailingLocationProvider;

#[async_trait]
impl LocationProvider for FailingLocationProvider {
    async fn sample(&self, _user_id: Uuid) -> Result<VisitedLocation, ProviderError> {
        Err(ProviderError::Unavailable("gps offline".to_string()))
    }
}

/// A fresh user with no history.
pub fn user(name: &str) -> Arc<User> {
    Arc::new(User::new(Uuid::new_v4(), name, "000", "test@trailrewards.com"))
}

/// A sighting of `user` at `location`, timestamped now.
pub async fn visit(user: &User, location: Location) {
    user.add_visited_location(VisitedLocation::new(user.id(), location, Utc::now()))
        .await;
}
