//! Address geocoding
//!
//! Converts free-text addresses into coordinates through an external
//! geocoding service. External services hand back GeoJSON positions, which
//! are longitude-first; this module is the single boundary where those are
//! reordered into the crate-wide (latitude, longitude) convention.

pub mod nominatim;

use crate::config::GeocoderConfig;
use crate::error::Result;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A geocoded address match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeMatch {
    /// Candidate location, already in (latitude, longitude) order
    pub point: GeoPoint,
    /// Display name of the match
    pub display_name: String,
}

/// Trait for geocoding backends
pub trait GeocodeBackend: Send + Sync {
    /// Geocode an address to a candidate point
    ///
    /// Returns the best match for the query, or None if the service found
    /// no candidates. Callers surface None as an address-not-found failure
    /// and never invoke the evaluator.
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<GeocodeMatch>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder(config: &GeocoderConfig) -> nominatim::NominatimBackend {
    nominatim::NominatimBackend::new(config)
}
