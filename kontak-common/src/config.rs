//! Bootstrap configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments / environment variables (parsed by the binary)
//! 2. TOML config file
//! 3. Compiled defaults
//!
//! A missing TOML file is not an error. A malformed one is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default session (and flash message) lifetime in seconds
pub const DEFAULT_SESSION_TTL_SECS: u64 = 120;

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; anything left out falls back to the compiled
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Address to bind the HTTP listener to
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Session cookie lifetime in seconds
    #[serde(default)]
    pub session_ttl_secs: Option<u64>,

    /// Directory served under /static (optional)
    #[serde(default)]
    pub static_assets: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<PathBuf>,
    pub session_ttl_secs: Option<u64>,
    pub static_assets: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub session_ttl: Duration,
    pub static_assets: Option<PathBuf>,
    pub log_level: String,
}

impl Settings {
    /// Merge overrides over the TOML file over compiled defaults
    pub fn resolve(overrides: Overrides, toml: TomlConfig) -> Self {
        let session_ttl_secs = overrides
            .session_ttl_secs
            .or(toml.session_ttl_secs)
            .unwrap_or(DEFAULT_SESSION_TTL_SECS)
            .max(1);

        Self {
            bind_address: overrides
                .bind_address
                .or(toml.bind_address)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port: overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT),
            database_path: overrides
                .database_path
                .or(toml.database_path)
                .unwrap_or_else(default_database_path),
            session_ttl: Duration::from_secs(session_ttl_secs),
            static_assets: overrides.static_assets.or(toml.static_assets),
            log_level: toml.logging.level,
        }
    }

    /// Socket address string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Parse TOML configuration content
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Load the TOML config file
///
/// An explicitly requested file must exist. The default location is optional:
/// when it is absent the compiled defaults are used.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                info!("No config file found, using defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config = parse_toml_config(&content)?;

    if config.logging.level.trim().is_empty() {
        warn!("Empty log level in {}, using 'info'", path.display());
        return Ok(TomlConfig {
            logging: LoggingConfig::default(),
            ..config
        });
    }

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Default config file location: `<config_dir>/kontak/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kontak").join("config.toml"))
}

/// OS-dependent default database path
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("kontak").join("kontak.db"))
        .unwrap_or_else(|| PathBuf::from("./kontak_data/kontak.db"))
}
