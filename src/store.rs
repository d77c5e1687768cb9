//! In-memory user registry
//!
//! Process-wide store shared by the tracker and any direct caller, keyed by
//! user name. Users live behind `Arc` so every component appends to the same
//! instance.

use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::User;

/// Concurrent registry of users keyed by name.
#[derive(Debug, Default)]
pub struct UserStore {
    users: DashMap<String, Arc<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Register a user. The first registration for a name wins; returns
    /// whether this call inserted the user.
    pub fn put(&self, user: Arc<User>) -> bool {
        let mut inserted = false;
        self.users.entry(user.name().to_string()).or_insert_with(|| {
            inserted = true;
            Arc::clone(&user)
        });
        if !inserted {
            tracing::debug!(user = user.name(), "registration ignored, name already present");
        }
        inserted
    }

    pub fn get(&self, name: &str) -> Option<Arc<User>> {
        self.users.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of every registered user, in no particular order.
    pub fn all(&self) -> Vec<Arc<User>> {
        self.users
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str) -> Arc<User> {
        Arc::new(User::new(Uuid::new_v4(), name, "000", "test@trailrewards.com"))
    }

    #[test]
    fn put_then_get_returns_the_same_user() {
        let store = UserStore::new();
        let jon = user("jon");

        assert!(store.put(Arc::clone(&jon)));
        let found = store.get("jon").unwrap();
        assert_eq!(found.id(), jon.id());
    }

    #[test]
    fn first_registration_for_a_name_wins() {
        let store = UserStore::new();
        let first = user("jon");
        let second = user("jon");

        assert!(store.put(Arc::clone(&first)));
        assert!(!store.put(second));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("jon").unwrap().id(), first.id());
    }

    #[test]
    fn all_returns_every_registered_user() {
        let store = UserStore::new();
        store.put(user("jon"));
        store.put(user("jana"));

        assert_eq!(store.all().len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn get_unknown_name_is_none() {
        let store = UserStore::new();
        assert!(store.get("nobody").is_none());
    }
}
