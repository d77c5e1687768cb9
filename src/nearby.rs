//! Nearest-attraction query
//!
//! Ranks the catalog by distance to a location and annotates the closest
//! entries with reward points. Pure query, no side effects on the user.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Location, User};
use crate::error::RewardComputationError;
use crate::geo;
use crate::providers::{AttractionCatalog, RewardPointsOracle};

/// How many attractions the query returns by default.
pub const DEFAULT_NEARBY_COUNT: usize = 5;

/// One ranked attraction, ready for the API layer to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyAttraction {
    pub attraction_name: String,
    pub attraction_location: Location,
    pub user_location: Location,
    pub distance_miles: f64,
    pub reward_points: i32,
}

/// Ranks attractions by distance to a point.
pub struct NearestAttractionFinder {
    catalog: Arc<dyn AttractionCatalog>,
    oracle: Arc<dyn RewardPointsOracle>,
}

impl NearestAttractionFinder {
    pub fn new(catalog: Arc<dyn AttractionCatalog>, oracle: Arc<dyn RewardPointsOracle>) -> Self {
        Self { catalog, oracle }
    }

    /// The `count` attractions closest to `location`, ascending by distance.
    /// Ties keep catalog order; a catalog smaller than `count` is returned
    /// whole.
    pub async fn nearest(
        &self,
        location: Location,
        user: &User,
        count: usize,
    ) -> Result<Vec<NearbyAttraction>, RewardComputationError> {
        let attractions = self
            .catalog
            .list()
            .await
            .map_err(RewardComputationError::Catalog)?;

        let mut ranked: Vec<_> = attractions
            .into_iter()
            .map(|attraction| {
                let distance = geo::distance_miles(location, attraction.location);
                (attraction, distance)
            })
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(count);

        let mut results = Vec::with_capacity(ranked.len());
        for (attraction, distance_miles) in ranked {
            let reward_points = self
                .oracle
                .points(attraction.id, user.id())
                .await
                .map_err(|source| {
                    RewardComputationError::reward_points(attraction.name.as_str(), source)
                })?;
            results.push(NearbyAttraction {
                attraction_name: attraction.name,
                attraction_location: attraction.location,
                user_location: location,
                distance_miles,
                reward_points,
            });
        }
        Ok(results)
    }
}
