//! Internal user seeding
//!
//! Populates the store with synthetic users so the engine can run without a
//! real registration flow. Each seeded user starts with a short random
//! location history spread over the last month.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::domain::{Location, User, VisitedLocation};
use crate::providers::simulated::MAX_SAMPLED_LATITUDE;
use crate::store::UserStore;

/// Default seeded population size.
pub const DEFAULT_INTERNAL_USER_COUNT: usize = 100;

const SEEDED_HISTORY_LENGTH: usize = 3;

/// Register `count` synthetic users named `internalUser{i}`, each with a
/// random location history.
pub async fn seed_internal_users(store: &UserStore, count: usize) {
    for i in 0..count {
        let name = format!("internalUser{i}");
        let email = format!("{name}@trailrewards.com");
        let user = Arc::new(User::new(Uuid::new_v4(), &name, "000", &email));

        for _ in 0..SEEDED_HISTORY_LENGTH {
            let (latitude, longitude, days_ago) = {
                let mut rng = rand::thread_rng();
                (
                    rng.gen_range(-MAX_SAMPLED_LATITUDE..=MAX_SAMPLED_LATITUDE),
                    rng.gen_range(-180.0..=180.0),
                    rng.gen_range(0..30),
                )
            };
            let visited = VisitedLocation::new(
                user.id(),
                Location::new(latitude, longitude),
                Utc::now() - Duration::days(days_ago),
            );
            user.add_visited_location(visited).await;
        }

        store.put(user);
    }
    tracing::debug!(count, "internal users seeded");
}
