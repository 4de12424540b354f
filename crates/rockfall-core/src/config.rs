//! Configuration management for the rockfall dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// File intake configuration
    #[validate(nested)]
    pub intake: IntakeConfig,

    /// Analysis configuration
    #[validate(nested)]
    pub analysis: AnalysisConfig,

    /// Heat map configuration
    #[validate(nested)]
    pub heatmap: HeatMapConfig,

    /// API configuration
    pub api: ApiConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    #[validate(length(min = 1))]
    pub host: String,

    /// Port to listen on
    #[validate(range(min = 1))]
    pub port: u16,
}

/// How an intake slot treats its accept filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakePolicy {
    /// The filter only narrows what a picker shows; dropped files of any type are taken
    #[default]
    Advisory,
    /// Files that do not match the filter are rejected from every source
    Enforced,
}

/// File intake configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IntakeConfig {
    /// Accept filter for the drone imagery slot
    #[validate(length(min = 1))]
    pub imagery_accept: Vec<String>,

    /// Accept filter for the sensor readings slot
    #[validate(length(min = 1))]
    pub sensor_accept: Vec<String>,

    /// Accept filter policy
    pub policy: IntakePolicy,

    /// Maximum size of a single submitted file in bytes
    #[validate(range(min = 1))]
    pub max_file_size: u64,
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Backend name ("simulated")
    #[validate(length(min = 1))]
    pub backend: String,

    /// Fixed processing delay of the simulated backend in milliseconds
    #[validate(range(max = 600_000))]
    pub delay_ms: u64,

    /// Upper bound for a single run; `None` waits for the backend indefinitely
    #[validate(range(min = 1))]
    pub timeout_ms: Option<u64>,

    /// Capacity of the workflow event channel
    #[validate(range(min = 1))]
    pub event_capacity: usize,
}

/// Heat map configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HeatMapConfig {
    /// Number of grid rows
    #[validate(range(min = 1, max = 64))]
    pub rows: usize,

    /// Number of grid columns
    #[validate(range(min = 1, max = 64))]
    pub columns: usize,

    /// Fixed seed; when unset every render draws from entropy
    pub seed: Option<u64>,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Enable CORS
    pub enable_cors: bool,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json or text)
    #[validate(length(min = 1))]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_imagery_accept() -> Vec<String> {
    [".jpg", ".jpeg", ".png", ".tiff"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_sensor_accept() -> Vec<String> {
    [".csv", ".xlsx"].iter().map(ToString::to_string).collect()
}

const fn default_max_file_size() -> u64 {
    100_000_000 // 100MB
}

fn default_backend() -> String {
    "simulated".to_string()
}

const fn default_delay_ms() -> u64 {
    3000
}

const fn default_event_capacity() -> usize {
    64
}

const fn default_rows() -> usize {
    8
}

const fn default_columns() -> usize {
    12
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            imagery_accept: default_imagery_accept(),
            sensor_accept: default_sensor_accept(),
            policy: IntakePolicy::default(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            delay_ms: default_delay_ms(),
            timeout_ms: None,
            event_capacity: default_event_capacity(),
        }
    }
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            seed: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: default_cors_origins(),
        }
    }
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
    /// Load configuration from `config.*` in the working directory and `ROCKFALL_*`
    /// environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (falling back to `config.*`) and
    /// `ROCKFALL_*` environment variables, e.g. `ROCKFALL_ANALYSIS__DELAY_MS=500`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("ROCKFALL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|built| built.try_deserialize::<Self>())
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
