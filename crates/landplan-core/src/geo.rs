//! Geographic primitives shared across the workspace.
//!
//! Distances are great-circle (haversine) approximations over a spherical
//! Earth, accurate to well under 0.5% at the radii this service queries.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are within their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to `other` in meters.
    #[must_use]
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn distance_same_point_is_zero() {
        let p = Coordinate::new(51.5074, -0.1278);
        assert_eq!(p.distance_m(&p), 0.0);
    }

    #[test]
    fn distance_london_to_paris_known_value() {
        // London to Paris is approximately 344 km.
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let dist = london.distance_m(&paris);
        assert!(approx_eq(dist, 343_560.0, 5_000.0), "got {dist}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(40.7128, -74.0060);
        let b = Coordinate::new(40.7138, -74.0050);
        assert!(approx_eq(a.distance_m(&b), b.distance_m(&a), 1e-9));
    }

    #[test]
    fn validity_accepts_boundary_values() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(Coordinate::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn validity_rejects_out_of_range() {
        assert!(!Coordinate::new(200.0, 0.0).is_valid());
        assert!(!Coordinate::new(-90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 180.5).is_valid());
        assert!(!Coordinate::new(0.0, -181.0).is_valid());
    }
}
