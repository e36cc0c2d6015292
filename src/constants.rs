//! Centralized constants for the service-area crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in miles
    pub const EARTH_RADIUS_MILES: f64 = 3_958.8;

    /// Approximate miles per degree of latitude
    ///
    /// Also the fixed ratio used by the planar boundary construction.
    pub const MILES_PER_DEGREE: f64 = 69.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
}
