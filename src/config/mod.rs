//! Configuration loading and management
//!
//! Both sides read their settings from the process environment at startup.
//! The server may also start from a YAML file (named by `PUPPY_CONFIG`), with
//! environment variables overriding the file.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Port the server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5001;

/// Base URL the client talks to when `PUPPY_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable or field holds a value of the wrong shape
    #[error("Invalid value '{value}' for '{key}': {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    /// A configuration file could not be parsed
    #[error("Failed to parse config{}: {message}", in_file(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Server-side settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port (`PORT`)
    pub port: u16,

    /// Connection string (`DATABASE_URL`); the in-memory store is used when absent
    pub database_url: Option<String>,

    /// Pool size (`DATABASE_MAX_CONNECTIONS`)
    pub database_max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            database_max_connections: 5,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment, starting from `PUPPY_CONFIG` if set
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();
        let base = match lookup("PUPPY_CONFIG").filter(|p| !p.trim().is_empty()) {
            Some(path) => Self::read_yaml_file(&path)?,
            None => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Load from the defaults plus whatever `lookup` supplies
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Apply variables from `lookup` over the current values
    ///
    /// Empty variables are treated as unset.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = var("PORT") {
            self.port = parse_var("PORT", &port)?;
        }
        if let Some(url) = var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(max) = var("DATABASE_MAX_CONNECTIONS") {
            self.database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &max)?;
        }

        self.validate()
    }

    /// Reject settings no source may supply, whichever one they came from
    fn validate(self) -> Result<Self, ConfigError> {
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "database_max_connections".to_string(),
                value: "0".to_string(),
                message: "pool needs at least one connection".to_string(),
            });
        }
        Ok(self)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        Self::read_yaml_file(path)?.validate()
    }

    /// Parse a YAML file; `from_env` validates after applying overrides
    fn read_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()
    }

    /// Address to bind: every interface on the configured port
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Client-side settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the puppy API (`PUPPY_API_BASE_URL`)
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("PUPPY_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}

fn in_file(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}
