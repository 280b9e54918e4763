//! Configuration validation module

use crate::config::{Config, DatabaseConfig, LandscapeConfig, ServerConfig, SyncConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Database configuration error: {message}")]
    Database { message: String },

    #[error("Landscape configuration error: {message}")]
    Landscape { message: String },

    #[error("Sync configuration error: {message}")]
    Sync { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn landscape(message: impl Into<String>) -> Self {
        Self::Landscape {
            message: message.into(),
        }
    }

    pub fn sync(message: impl Into<String>) -> Self {
        Self::Sync {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only zero needs rejecting
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "request_timeout_seconds must be greater than zero",
            ));
        }

        if self.allowed_origins.is_empty() {
            return Err(ValidationError::server(
                "allowed_origins must not be empty; use [\"*\"] to allow any origin",
            ));
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::database("Database URL must not be empty"));
        }

        if self.max_connections == 0 {
            return Err(ValidationError::database(
                "max_connections must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl Validate for LandscapeConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.source_urls.is_empty() {
            return Err(ValidationError::landscape(
                "At least one landscape source URL must be configured",
            ));
        }

        for url in &self.source_urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::landscape(format!(
                    "Source URL must be http(s), got: {}",
                    url
                )));
            }
        }

        if self.fetch_timeout_seconds == 0 {
            return Err(ValidationError::landscape(
                "fetch_timeout_seconds must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && !self.on_startup && self.interval_hours == 0 {
            return Err(ValidationError::sync(
                "sync.enabled is set but neither sync.on_startup nor sync.interval_hours is configured",
            ));
        }

        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.landscape.validate()?;
        self.sync.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Server { .. })
        ));
    }

    #[test]
    fn rejects_empty_source_urls() {
        let config = LandscapeConfig {
            source_urls: Vec::new(),
            ..LandscapeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Landscape { .. })
        ));
    }

    #[test]
    fn rejects_non_http_source_url() {
        let config = LandscapeConfig {
            source_urls: vec!["ftp://example.com/landscape.yml".to_string()],
            ..LandscapeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Landscape { .. })
        ));
    }

    #[test]
    fn rejects_zero_fetch_timeout() {
        let config = LandscapeConfig {
            fetch_timeout_seconds: 0,
            ..LandscapeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Landscape { .. })
        ));
    }

    #[test]
    fn rejects_enabled_sync_with_no_trigger() {
        let config = SyncConfig {
            enabled: true,
            on_startup: false,
            interval_hours: 0,
            ..SyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::Sync { .. })));
    }
}
