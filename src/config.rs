//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::metrics::DEFAULT_MIGRATION_THRESHOLD;
use crate::theme::ColorTheme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input file locations
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_population_path")]
    pub population_path: PathBuf,

    #[serde(default = "default_boundaries_path")]
    pub boundaries_path: PathBuf,
}

fn default_population_path() -> PathBuf {
    PathBuf::from("Mydata.csv")
}

fn default_boundaries_path() -> PathBuf {
    PathBuf::from("gadm41_KEN_1.geojson")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            population_path: default_population_path(),
            boundaries_path: default_boundaries_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard behavior
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Year-over-year change that counts as migration
    #[serde(default = "default_migration_threshold")]
    pub migration_threshold: u64,

    /// Theme used when a request does not name one
    #[serde(default)]
    pub default_theme: ColorTheme,

    /// Page title shown in the sidebar and browser tab
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_migration_threshold() -> u64 {
    DEFAULT_MIGRATION_THRESHOLD
}

fn default_title() -> String {
    "Kenyan Counties Population".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            migration_threshold: default_migration_threshold(),
            default_theme: ColorTheme::default(),
            title: default_title(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("kenpop").join("config.toml")),
            Some(PathBuf::from("/etc/kenpop/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(path) = lookup("KENPOP_DATA_PATH") {
            self.data.population_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("KENPOP_BOUNDARIES_PATH") {
            self.data.boundaries_path = PathBuf::from(path);
        }

        // API overrides
        if let Some(host) = lookup("KENPOP_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("KENPOP_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid KENPOP_API_PORT: {}", port),
            }
        }

        // Dashboard overrides
        if let Some(threshold) = lookup("KENPOP_MIGRATION_THRESHOLD") {
            match threshold.parse() {
                Ok(t) => self.dashboard.migration_threshold = t,
                Err(_) => tracing::warn!(
                    "Ignoring invalid KENPOP_MIGRATION_THRESHOLD: {}",
                    threshold
                ),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("KENPOP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("KENPOP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Kenpop Configuration
#
# Environment variables override these settings:
# - KENPOP_DATA_PATH
# - KENPOP_BOUNDARIES_PATH
# - KENPOP_API_HOST
# - KENPOP_API_PORT
# - KENPOP_MIGRATION_THRESHOLD
# - KENPOP_LOG_LEVEL
# - KENPOP_LOG_FORMAT

[data]
# Population table with columns: counties, id, year, population
population_path = "Mydata.csv"

# County boundaries (GeoJSON FeatureCollection keyed by properties.id)
boundaries_path = "gadm41_KEN_1.geojson"

[api]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[dashboard]
# Year-over-year change that counts as inbound/outbound migration
migration_threshold = 50000

# Theme used when none is selected: blues, cividis, greens, inferno, magma,
# plasma, reds, rainbow, turbo, viridis
default_theme = "blues"

title = "Kenyan Counties Population"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
