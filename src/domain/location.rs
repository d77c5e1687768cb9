//! Location types
//!
//! Coordinate values recorded for users. A `VisitedLocation` is immutable
//! once constructed; history ordering comes from append order, not from
//! comparing timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// One recorded sighting of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitedLocation {
    pub user_id: Uuid,
    pub location: Location,
    pub time_visited: DateTime<Utc>,
}

impl VisitedLocation {
    pub fn new(user_id: Uuid, location: Location, time_visited: DateTime<Utc>) -> Self {
        Self {
            user_id,
            location,
            time_visited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_is_fixed_precision() {
        let loc = Location::new(33.817595, -117.922008);
        assert_eq!(loc.to_string(), "(33.817595, -117.922008)");
    }

    #[test]
    fn visited_location_keeps_its_fields() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let visited = VisitedLocation::new(user_id, Location::new(1.0, 2.0), now);

        assert_eq!(visited.user_id, user_id);
        assert_eq!(visited.location, Location::new(1.0, 2.0));
        assert_eq!(visited.time_visited, now);
    }
}
