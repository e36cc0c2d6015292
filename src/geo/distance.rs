//! Great-circle distance
//!
//! Haversine distance on a spherical Earth model. This is the only distance
//! the crate ever computes; the boundary polygon is a display aid and never
//! feeds back into eligibility.

use crate::constants::geo::EARTH_RADIUS_MILES;
use crate::error::Result;
use crate::geo::GeoPoint;

/// Shortest surface distance between two points, in miles
///
/// # Arguments
/// * `a` - First point (reference/center)
/// * `b` - Second point (candidate)
///
/// # Returns
/// Non-negative distance in miles
///
/// # Guarantees
/// - 0 for identical points
/// - Symmetric up to floating-point rounding
/// - Total for any pair of valid points, including antipodes
///
/// Both points are range-checked; an out-of-range latitude or longitude is
/// an `InvalidCoordinate` error, never clamped.
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> Result<f64> {
    a.validate()?;
    b.validate()?;

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_MILES * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_points_zero() {
        let p = GeoPoint::new(34.1, -84.5);
        assert_eq!(distance_miles(p, p).unwrap(), 0.0);

        let q = GeoPoint::new(-45.0, 170.0);
        assert_eq!(distance_miles(q, q).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(34.1, -84.5);
        let b = GeoPoint::new(33.75, -84.39); // Atlanta

        let ab = distance_miles(a, b).unwrap();
        let ba = distance_miles(b, a).unwrap();
        assert_relative_eq!(ab, ba, max_relative = 1e-9);
    }

    #[test]
    fn test_never_negative() {
        let a = GeoPoint::new(0.0, -179.9);
        let b = GeoPoint::new(0.0, 179.9);
        assert!(distance_miles(a, b).unwrap() >= 0.0);
    }

    #[test]
    fn test_known_fixture() {
        // Canton, GA vs. a point ~25 miles due north
        let center = GeoPoint::new(34.1, -84.5);
        let nearby = GeoPoint::new(34.1 + 25.0 / 69.0, -84.5);

        let distance = distance_miles(center, nearby).unwrap();
        assert!(
            (24.5..=25.5).contains(&distance),
            "Distance {} should be about 25 miles",
            distance
        );
    }

    #[test]
    fn test_antipodal_points() {
        let north = GeoPoint::new(90.0, 0.0);
        let south = GeoPoint::new(-90.0, 0.0);

        // Half the Earth's circumference
        let distance = distance_miles(north, south).unwrap();
        assert_relative_eq!(
            distance,
            std::f64::consts::PI * EARTH_RADIUS_MILES,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_invalid_latitude() {
        let bad = GeoPoint::new(91.0, 0.0);
        let good = GeoPoint::new(0.0, 0.0);
        assert!(distance_miles(bad, good).is_err());
        assert!(distance_miles(good, bad).is_err());
    }
}
