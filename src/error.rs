//! Error types for service-area

use thiserror::Error;

/// Main error type for service-area operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid service config: {0}")]
    InvalidServiceConfig(String),

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for service-area operations
pub type Result<T> = std::result::Result<T, Error>;
