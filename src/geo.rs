//! Great-circle distance
//!
//! Pure geospatial math shared by the reward engine and the nearby-attraction
//! query. Distances are statute miles on a spherical Earth.

use crate::domain::Location;

/// Conversion factor from nautical miles to statute miles.
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.15077945;

/// Distance between two coordinates in statute miles, via the spherical law
/// of cosines.
///
/// The cosine argument is clamped to `[-1, 1]`: for identical or antipodal
/// points, rounding can push it just outside the domain of `acos`, which
/// would yield NaN.
pub fn distance_miles(a: Location, b: Location) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lon1 = a.longitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let lon2 = b.longitude.to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();
    let angle = cos_angle.clamp(-1.0, 1.0).acos();

    let nautical_miles = 60.0 * angle.to_degrees();
    STATUTE_MILES_PER_NAUTICAL_MILE * nautical_miles
}
