//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub landscape: LandscapeConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overall per-request timeout applied by the router
    pub request_timeout_seconds: u64,
    /// CORS origins; a single "*" entry allows any origin
    pub allowed_origins: Vec<String>,
    /// Expose the OpenAPI document at /api-docs/openapi.json
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
            allowed_origins: vec!["*".to_string()],
            enable_docs: true,
        }
    }
}

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://cncf-explorer.db?mode=rwc".to_string(),
            max_connections: 5,
            connect_timeout_seconds: 30,
        }
    }
}

/// Landscape source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LandscapeConfig {
    /// Candidate source URLs, attempted in order until one yields a
    /// usable document
    pub source_urls: Vec<String>,
    /// Per-request timeout for each fetch attempt
    pub fetch_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            // The CNCF landscape only publishes YAML; JSON is generated
            // during its site build and is not fetchable here.
            source_urls: vec![
                "https://raw.githubusercontent.com/cncf/landscape/main/landscape.yml".to_string(),
                "https://raw.githubusercontent.com/cncf/landscape/master/landscape.yml".to_string(),
                "https://github.com/cncf/landscape/raw/main/landscape.yml".to_string(),
            ],
            fetch_timeout_seconds: 30,
            user_agent: concat!("cncf-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Background sync worker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Master switch for the background worker
    pub enabled: bool,
    /// Run one sync as soon as the server starts
    pub on_startup: bool,
    /// Periodic re-sync interval; 0 disables periodic syncs
    pub interval_hours: u64,
    /// Grace period for background tasks during shutdown
    pub shutdown_timeout_seconds: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            on_startup: false,
            interval_hours: 0,
            shutdown_timeout_seconds: 5,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "json" or "pretty"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Sources, lowest to highest priority: `config/default`,
    /// `config/{ENV}`, `config/local`, then environment variables with
    /// the `CNCF_EXPLORER__` prefix and `__` separators. `DATABASE_URL`
    /// overrides the database URL by convention.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CNCF_EXPLORER").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;

        if let Ok(database_url) = std::env::var("DATABASE_URL") {
            config.database.url = database_url;
        }

        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
