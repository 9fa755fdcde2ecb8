//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/neargo/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Location data source
    #[serde(default)]
    pub source: SourceConfig,

    /// Query defaults
    #[serde(default)]
    pub query: QueryConfig,
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

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,
}

/// Location data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// geonames.org zip archive URL
    #[serde(default = "default_source_url")]
    pub url: String,

    /// Where to keep the downloaded archive. Empty means never store it.
    #[serde(default)]
    pub file: String,
}

/// Query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Radius in kilometers used when a query has no `max`
    #[serde(default = "default_max")]
    pub default_max: i64,

    /// Default CLI output format
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_cors() -> bool {
    DEFAULT_CORS
}
fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}
fn default_max() -> i64 {
    DEFAULT_MAX_KM
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            file: String::new(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_max: default_max(),
            format: default_format(),
        }
    }
}

impl SourceConfig {
    /// Archive cache path, if one is configured
    pub fn cache_path(&self) -> Option<PathBuf> {
        if self.file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file))
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
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    ///
    /// Creates default config at that path if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "cors"] => Some(self.server.cors.to_string()),

            ["source", "url"] => Some(self.source.url.clone()),
            ["source", "file"] => Some(self.source.file.clone()),

            ["query", "default_max"] => Some(self.query.default_max.to_string()),
            ["query", "format"] => Some(self.query.format.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }
            ["server", "cors"] => {
                self.server.cors = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }

            ["source", "url"] => {
                self.source.url = value.to_string();
            }
            ["source", "file"] => {
                self.source.file = value.to_string();
            }

            ["query", "default_max"] => {
                self.query.default_max = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid radius value: {}", value))
                })?;
            }
            ["query", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown output format: {}", value)));
                }
                self.query.format = value.to_lowercase();
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
            "server.host",
            "server.port",
            "server.cors",
            "source.url",
            "source.file",
            "query.default_max",
            "query.format",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3141);
        assert!(config.server.cors);
        assert_eq!(config.source.url, "https://download.geonames.org/export/zip/DE.zip");
        assert!(config.source.cache_path().is_none());
        assert_eq!(config.query.default_max, 100);
        assert_eq!(config.query.format, "json");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("server.port"), Some("3141".to_string()));

        config.set("server.port", "8080").unwrap();
        assert_eq!(config.server.port, 8080);

        config.set("query.default_max", "-1").unwrap();
        assert_eq!(config.get("query.default_max"), Some("-1".to_string()));
        assert_eq!(config.query.default_max, -1);

        config.set("source.file", "/var/cache/neargo/DE.zip").unwrap();
        assert_eq!(
            config.source.cache_path(),
            Some(PathBuf::from("/var/cache/neargo/DE.zip"))
        );

        config.set("query.format", "TEXT").unwrap();
        assert_eq!(config.query.format, "text");
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
        assert_eq!(config.get("server"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("query.default_max", "ten").is_err());
        assert!(config.set("query.default_max", "1.5").is_err());
        assert!(config.set("server.port", "70000").is_err());
        assert!(config.set("server.cors", "maybe").is_err());
        assert!(config.set("query.format", "gpx").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("neargo").join("config.toml");

        let mut config = Config::default();
        config.server.port = 9000;
        config.source.url = "https://download.geonames.org/export/zip/AT.zip".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 9000);
        assert_eq!(loaded.source.url, "https://download.geonames.org/export/zip/AT.zip");
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.server.port, 3141);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[query]\ndefault_max = 25\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.query.default_max, 25);
        assert_eq!(config.query.format, "json");
        assert_eq!(config.server.port, 3141);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[source]"));
        assert!(toml.contains("[query]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3141");
    }

    #[test]
    fn test_available_keys() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "key {} has no value", key);
        }
    }
}
