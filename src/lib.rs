//! service-area: Service-Radius Eligibility Checker
//!
//! A library and CLI tool that decides whether a candidate location falls
//! within a fixed service radius of a configured center, and produces a
//! polygon approximation of that radius for display.
//!
//! ## Features
//!
//! - Haversine great-circle distance in miles
//! - Inclusive-boundary eligibility verdicts
//! - Planar boundary-polygon generation for map display
//! - Address geocoding through OpenStreetMap Nominatim
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use service_area::area;
//! use service_area::config::ServiceConfig;
//! use service_area::geo::GeoPoint;
//!
//! let config = ServiceConfig {
//!     center: GeoPoint::new(34.1, -84.5), // Canton, GA
//!     radius_miles: 25.0,
//!     vertex_step_degrees: 5,
//! };
//!
//! // Classify a candidate point
//! let candidate = GeoPoint::new(34.2, -84.4);
//! let result = area::evaluate(candidate, &config).unwrap();
//! assert!(result.within_service);
//!
//! // Boundary ring for the map
//! let ring = area::boundary::boundary_polygon(&config, 5).unwrap();
//! assert_eq!(ring.len(), 72);
//! ```

pub mod area;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod geocode;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use area::boundary::BoundaryPolygon;
pub use area::{CheckReport, EligibilityResult};
pub use config::{Config, ServiceConfig};
pub use error::{Error, Result};
pub use geo::GeoPoint;
