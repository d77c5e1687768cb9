//! Attraction type
//!
//! Points of interest supplied by the external catalog. Attraction names are
//! unique within a catalog snapshot and serve as the de-duplication key for
//! rewards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

/// A point of interest from the attraction catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub location: Location,
}

impl Attraction {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            location: Location::new(latitude, longitude),
        }
    }
}
