//! Service-area evaluation
//!
//! Classifies a candidate point against the configured service radius and
//! produces the display boundary. Everything here is pure and call-scoped:
//! no state survives between calls, so callers may invoke these functions
//! concurrently without coordination.

pub mod boundary;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::geo::{distance, GeoPoint};
use serde::{Deserialize, Serialize};

/// Verdict for a single candidate point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Great-circle distance from the service center, in miles
    pub distance_miles: f64,
    /// True when the candidate lies within the service radius (inclusive)
    pub within_service: bool,
}

/// Classify a candidate point against the configured service area
///
/// The boundary is inclusive: a point exactly at the radius is eligible.
/// Deterministic; identical inputs give bit-identical distances.
pub fn evaluate(candidate: GeoPoint, config: &ServiceConfig) -> Result<EligibilityResult> {
    let distance_miles = distance::distance_miles(config.center, candidate)?;
    Ok(EligibilityResult {
        distance_miles,
        within_service: distance_miles <= config.radius_miles,
    })
}

/// Full report for one eligibility check
///
/// Shared by the output formatters and the HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Free-text query, when the candidate came from geocoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Display name the geocoder matched the query to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,

    /// Candidate location
    pub candidate: GeoPoint,

    /// Configured service center
    pub center: GeoPoint,

    /// Configured service radius in miles
    pub radius_miles: f64,

    /// The verdict
    pub result: EligibilityResult,
}

/// Evaluate a candidate and wrap the verdict in a report
///
/// `address` and `matched` start empty; callers that geocoded fill them in.
pub fn report(candidate: GeoPoint, config: &ServiceConfig) -> Result<CheckReport> {
    let result = evaluate(candidate, config)?;
    Ok(CheckReport {
        address: None,
        matched: None,
        candidate,
        center: config.center,
        radius_miles: config.radius_miles,
        result,
    })
}
