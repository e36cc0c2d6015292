//! Geographic primitives
//!
//! The whole crate speaks a single coordinate-order convention:
//! (latitude, longitude). Anything longitude-first (GeoJSON positions,
//! geocoder responses) is reordered exactly once at the boundary that
//! receives it.

pub mod distance;

use serde::{Deserialize, Serialize};

/// A geographic point (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from a GeoJSON-style position (longitude first)
    ///
    /// This is the one sanctioned place where longitude-first data gets
    /// flipped into the crate convention.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate that the point is within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.latitude < -90.0 || self.latitude > 90.0 {
            return Err(crate::error::Error::InvalidCoordinate(format!(
                "Latitude {} is out of range [-90, 90]",
                self.latitude
            )));
        }
        if self.longitude < -180.0 || self.longitude > 180.0 {
            return Err(crate::error::Error::InvalidCoordinate(format!(
                "Longitude {} is out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}
