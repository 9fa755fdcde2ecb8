//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::GEONAMES_DE_URL;

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 3141;

/// Whether cross-origin requests are allowed by default
pub const DEFAULT_CORS: bool = true;

/// Default geonames archive URL
pub const DEFAULT_SOURCE_URL: &str = GEONAMES_DE_URL;

/// Default search radius in kilometers when `max` is not given
pub const DEFAULT_MAX_KM: i64 = 100;

/// Default CLI output format
pub const DEFAULT_FORMAT: &str = "json";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "neargo";
