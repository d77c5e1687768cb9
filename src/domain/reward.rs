//! UserReward type

use serde::{Deserialize, Serialize};

use super::{Attraction, VisitedLocation};

/// A reward granted for being near an attraction.
///
/// At most one reward per attraction name exists on any user, no matter how
/// many visited locations were close enough to trigger it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReward {
    pub visited_location: VisitedLocation,
    pub attraction: Attraction,
    pub reward_points: i32,
}

impl UserReward {
    pub fn new(visited_location: VisitedLocation, attraction: Attraction, reward_points: i32) -> Self {
        Self {
            visited_location,
            attraction,
            reward_points,
        }
    }
}
