//! Server shared state
//!
//! Holds the validated configuration and shared resources for the HTTP
//! server. The config is loaded once at startup and never mutated, so
//! handlers read it without locking.

use crate::config::Config;
use crate::geocode::nominatim::NominatimBackend;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration (immutable after startup)
    pub config: Config,

    /// Geocoding backend
    geocoder: NominatimBackend,

    /// Request-generation counter for check responses
    seq: AtomicU64,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let geocoder = NominatimBackend::new(&config.geocoder);
        Self {
            config,
            geocoder,
            seq: AtomicU64::new(0),
        }
    }

    /// Get the geocoding backend
    pub fn geocoder(&self) -> &NominatimBackend {
        &self.geocoder
    }

    /// Next request-generation token
    ///
    /// Strictly increasing per process. A client with overlapping checks in
    /// flight keeps only the response carrying the highest token, so a stale
    /// geocode can never overwrite a newer verdict.
    pub fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_strictly_increasing() {
        let state = AppState::new(Config::default());
        let a = state.next_seq();
        let b = state.next_seq();
        let c = state.next_seq();
        assert!(a < b && b < c);
        assert_eq!(a, 1);
    }
}
