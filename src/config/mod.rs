//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/service-area/config.toml
//!
//! The service section is validated fail-fast at load time: a non-positive
//! radius or malformed center is fatal at startup, never discovered
//! per-query.

pub mod defaults;

use crate::area::boundary::DEFAULT_VERTEX_STEP_DEGREES;
use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The service area: center and radius
    #[serde(default)]
    pub service: ServiceConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoder settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Default values for output
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// The service area: process-wide constant, loaded once, never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service-center coordinate
    #[serde(default = "default_center")]
    pub center: GeoPoint,

    /// Service radius in miles (must be positive)
    #[serde(default = "default_radius_miles")]
    pub radius_miles: f64,

    /// Angular step between boundary-polygon vertices, in degrees
    #[serde(default = "default_vertex_step")]
    pub vertex_step_degrees: u32,
}

impl ServiceConfig {
    /// Validate the service area
    ///
    /// Fatal at configuration load; per-query code may assume a validated
    /// config.
    pub fn validate(&self) -> Result<()> {
        self.center
            .validate()
            .map_err(|e| Error::InvalidServiceConfig(format!("Malformed center: {}", e)))?;
        if self.radius_miles <= 0.0 {
            return Err(Error::InvalidServiceConfig(format!(
                "Radius {} must be positive",
                self.radius_miles
            )));
        }
        if self.vertex_step_degrees == 0 || 360 % self.vertex_step_degrees != 0 {
            return Err(Error::InvalidServiceConfig(format!(
                "Vertex step {} must be positive and divide 360 evenly",
                self.vertex_step_degrees
            )));
        }
        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Geocoder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Geocoding API endpoint
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,

    /// User-Agent header sent to the geocoder
    #[serde(default = "default_geocoder_user_agent")]
    pub user_agent: String,
}

/// Default values for output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_center() -> GeoPoint {
    GeoPoint::new(DEFAULT_CENTER_LATITUDE, DEFAULT_CENTER_LONGITUDE)
}
fn default_radius_miles() -> f64 {
    DEFAULT_RADIUS_MILES
}
fn default_vertex_step() -> u32 {
    DEFAULT_VERTEX_STEP_DEGREES
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_geocoder_endpoint() -> String {
    NOMINATIM_URL.to_string()
}
fn default_geocoder_user_agent() -> String {
    DEFAULT_GEOCODER_USER_AGENT.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},15z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map=14/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}".to_string(),
    );
    providers
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            server: ServerConfig::default(),
            geocoder: GeocoderConfig::default(),
            defaults: DefaultsConfig::default(),
            url: UrlConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            radius_miles: default_radius_miles(),
            vertex_step_degrees: default_vertex_step(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_geocoder_user_agent(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist. The service section is
    /// validated before the config is handed out.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let config: Config = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        config.service.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "center_latitude"] => Some(self.service.center.latitude.to_string()),
            ["service", "center_longitude"] => Some(self.service.center.longitude.to_string()),
            ["service", "radius_miles"] => Some(self.service.radius_miles.to_string()),
            ["service", "vertex_step_degrees"] => {
                Some(self.service.vertex_step_degrees.to_string())
            }

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["geocoder", "endpoint"] => Some(self.geocoder.endpoint.clone()),
            ["geocoder", "user_agent"] => Some(self.geocoder.user_agent.clone()),

            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Service keys are re-validated after the change.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "center_latitude"] => {
                self.service.center.latitude = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid latitude value: {}", value)))?;
                self.service.validate()?;
            }
            ["service", "center_longitude"] => {
                self.service.center.longitude = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid longitude value: {}", value)))?;
                self.service.validate()?;
            }
            ["service", "radius_miles"] => {
                self.service.radius_miles = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
                self.service.validate()?;
            }
            ["service", "vertex_step_degrees"] => {
                self.service.vertex_step_degrees = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid step value: {}", value)))?;
                self.service.validate()?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["geocoder", "endpoint"] => {
                self.geocoder.endpoint = value.to_string();
            }
            ["geocoder", "user_agent"] => {
                self.geocoder.user_agent = value.to_string();
            }

            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["url", "default"] => {
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "service.center_latitude",
            "service.center_longitude",
            "service.radius_miles",
            "service.vertex_step_degrees",
            "server.host",
            "server.port",
            "geocoder.endpoint",
            "geocoder.user_agent",
            "defaults.format",
            "url.default",
        ]
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self
            .url
            .providers
            .get(provider_name)
            .ok_or_else(|| Error::Config(format!("Unknown URL provider: {}", provider_name)))?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
