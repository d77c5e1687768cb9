//! Simulated collaborators
//!
//! In-process stand-ins for the external GPS and rewards services, used by
//! the demo binary and anywhere a deployment wants the engine running
//! without real upstreams. Latency is randomized to keep the concurrency
//! paths honest.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

use super::{AttractionCatalog, LocationProvider, ProviderError, RewardPointsOracle};
use crate::domain::{Attraction, Location, VisitedLocation};

/// Latitude bound used when sampling random locations (Web Mercator limit).
pub const MAX_SAMPLED_LATITUDE: f64 = 85.051_128_78;

/// Fixed catalog of real-world attractions.
#[derive(Debug)]
pub struct SimulatedAttractionCatalog {
    attractions: Vec<Attraction>,
}

impl SimulatedAttractionCatalog {
    pub fn new() -> Self {
        let attractions = vec![
            Attraction::new("Disneyland", "Anaheim", "CA", 33.817595, -117.922008),
            Attraction::new("Jackson Hole", "Jackson Hole", "WY", 43.582767, -110.821999),
            Attraction::new("Mojave National Preserve", "Kelso", "CA", 35.141689, -115.510399),
            Attraction::new("Joshua Tree National Park", "Joshua Tree", "CA", 33.881866, -115.900650),
            Attraction::new("Buffalo National River", "St Joe", "AR", 35.985512, -92.757652),
            Attraction::new("Hot Springs National Park", "Hot Springs", "AR", 34.521530, -93.042267),
            Attraction::new("Kartchner Caverns State Park", "Benson", "AZ", 31.837551, -110.347382),
            Attraction::new("Legend Valley", "Thornville", "OH", 39.937778, -82.406670),
            Attraction::new("Flowers Bakery of London", "London", "KY", 37.131527, -84.074860),
            Attraction::new("McKinley Tower", "Anchorage", "AK", 61.218887, -149.877502),
            Attraction::new("Flatiron Building", "New York City", "NY", 40.741112, -73.989723),
            Attraction::new("Fallingwater", "Mill Run", "PA", 39.906113, -79.468056),
            Attraction::new("Union Station", "Washington D.C.", "DC", 38.897095, -77.006332),
            Attraction::new("Roger Dean Stadium", "Jupiter", "FL", 26.890959, -80.116577),
            Attraction::new("Texas Memorial Stadium", "Austin", "TX", 30.283682, -97.732536),
            Attraction::new("Bryant-Denny Stadium", "Tuscaloosa", "AL", 33.208973, -87.550438),
            Attraction::new("Tiger Stadium", "Baton Rouge", "LA", 30.412035, -91.183815),
            Attraction::new("Neyland Stadium", "Knoxville", "TN", 35.955013, -83.925011),
            Attraction::new("Kyle Field", "College Station", "TX", 30.610250, -96.340008),
            Attraction::new("San Diego Zoo", "San Diego", "CA", 32.735317, -117.149048),
            Attraction::new("Zoo Tampa at Lowry Park", "Tampa", "FL", 28.012804, -82.469269),
            Attraction::new("Franklin Park Zoo", "Boston", "MA", 42.302601, -71.086731),
            Attraction::new("El Paso Zoo", "El Paso", "TX", 31.769125, -106.444870),
            Attraction::new("Kansas City Zoo", "Kansas City", "MO", 39.007504, -94.529625),
            Attraction::new("St. Louis Zoo", "St. Louis", "MO", 38.635345, -90.293152),
            Attraction::new("Cincinnati Zoo & Botanical Garden", "Cincinnati", "OH", 39.144852, -84.509399),
        ];
        Self { attractions }
    }
}

impl Default for SimulatedAttractionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttractionCatalog for SimulatedAttractionCatalog {
    async fn list(&self) -> Result<Vec<Attraction>, ProviderError> {
        let millis = rand::thread_rng().gen_range(10..=50);
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(self.attractions.clone())
    }
}

/// Samples uniformly random locations with GPS-like latency.
#[derive(Debug, Default)]
pub struct SimulatedLocationProvider;

impl SimulatedLocationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocationProvider for SimulatedLocationProvider {
    async fn sample(&self, user_id: Uuid) -> Result<VisitedLocation, ProviderError> {
        let (latitude, longitude, millis) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(-MAX_SAMPLED_LATITUDE..=MAX_SAMPLED_LATITUDE),
                rng.gen_range(-180.0..=180.0),
                rng.gen_range(30..=100),
            )
        };
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(VisitedLocation::new(
            user_id,
            Location::new(latitude, longitude),
            Utc::now(),
        ))
    }
}

/// Deterministic points oracle.
///
/// Mixes the two ids so repeated lookups for the same (attraction, user)
/// pair agree, which the engine relies on.
#[derive(Debug, Default)]
pub struct SimulatedRewardsOracle;

impl SimulatedRewardsOracle {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RewardPointsOracle for SimulatedRewardsOracle {
    async fn points(&self, attraction_id: Uuid, user_id: Uuid) -> Result<i32, ProviderError> {
        let millis = rand::thread_rng().gen_range(1..=25);
        tokio::time::sleep(Duration::from_millis(millis)).await;
        let mix = attraction_id.as_u128() ^ user_id.as_u128();
        Ok((mix % 1000) as i32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn catalog_names_are_unique() {
        let catalog = SimulatedAttractionCatalog::new();
        let attractions = catalog.list().await.unwrap();

        let names: HashSet<_> = attractions.iter().map(|a| a.name.as_str()).collect();
        assert!(!attractions.is_empty());
        assert_eq!(names.len(), attractions.len());
    }

    #[tokio::test]
    async fn sampled_locations_stay_in_bounds() {
        let provider = SimulatedLocationProvider::new();
        let user_id = Uuid::new_v4();

        for _ in 0..10 {
            let visited = provider.sample(user_id).await.unwrap();
            assert_eq!(visited.user_id, user_id);
            assert!(visited.location.latitude.abs() <= MAX_SAMPLED_LATITUDE);
            assert!(visited.location.longitude.abs() <= 180.0);
        }
    }

    #[tokio::test]
    async fn oracle_is_deterministic_and_in_range() {
        let oracle = SimulatedRewardsOracle::new();
        let attraction_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let first = oracle.points(attraction_id, user_id).await.unwrap();
        let second = oracle.points(attraction_id, user_id).await.unwrap();

        assert_eq!(first, second);
        assert!((1..=1000).contains(&first));
    }
}
