//! Output formatters
//!
//! Provides trait-based output formatting for eligibility reports.

pub mod geojson;
pub mod json;
pub mod text;
pub mod url;

use crate::area::CheckReport;
use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format an eligibility report
    ///
    /// # Arguments
    /// * `report` - The report to format
    /// * `config` - Application config (for the boundary ring, url providers)
    fn format(&self, report: &CheckReport, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "geojson" => Some(Box::new(geojson::GeoJsonFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON report".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable verdict".to_string(),
        },
        FormatInfo {
            name: "geojson".to_string(),
            description: "Marker and boundary as GeoJSON".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL for the candidate point".to_string(),
        },
    ]
}
