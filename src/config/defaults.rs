//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default service-center latitude (Canton, GA)
pub const DEFAULT_CENTER_LATITUDE: f64 = 34.1;

/// Default service-center longitude (Canton, GA)
pub const DEFAULT_CENTER_LONGITUDE: f64 = -84.5;

/// Default service radius in miles
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Default geocoder User-Agent (Nominatim requires one)
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "service-area/0.1.0";

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "service-area";
