//! Application configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file. Every variable is optional.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3001` |
//! | `TASKS_FILE` | `data/tasks.json` |
//! | `APP_ENV` | `development` |
//! | `LOG_FORMAT` | `pretty` |

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::server::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

pub const DEFAULT_TASKS_FILE: &str = "data/tasks.json";

// =============================================================================
// ConfigError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Environment
// =============================================================================

/// Deployment environment. Only `production` changes behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Whether error bodies carry a `stack` member.
    #[must_use]
    pub const fn exposes_stack(self) -> bool {
        matches!(self, Self::Development)
    }
}

// =============================================================================
// LogFormat
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid(
                "LOG_FORMAT",
                format!("expected 'pretty' or 'json', got '{other}'"),
            )),
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tasks_file: PathBuf,
    pub environment: Environment,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            environment: Environment::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` or `LOG_FORMAT`
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` or `LOG_FORMAT`
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let tasks_file = lookup("TASKS_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE), PathBuf::from);
        let environment = lookup("APP_ENV")
            .as_deref()
            .map(Environment::from_name)
            .unwrap_or_default();
        let log_format = lookup("LOG_FORMAT")
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            server: ServerConfig::new(host, port),
            tasks_file,
            environment,
            log_format,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse::<u16>().map_err(|error| {
        ConfigError::invalid("PORT", format!("'{raw}' is not a port number ({error})"))
    })
}

// =============================================================================
// Tests
// =============================================================================
