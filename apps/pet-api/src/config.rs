//! Pet API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default SQLite database path.
pub const DEFAULT_DATABASE_PATH: &str = "../database/database.db";

/// Which repository implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// SQLite file through sqlx.
    Sqlite,
    /// Process-local map; data is lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::InvalidValue("PETSTORE_STORE".to_string())),
        }
    }
}

/// Pet API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Bind address
    pub bind_addr: String,

    /// Repository implementation
    pub store: StoreKind,

    /// SQLite database file (ignored for the memory store)
    pub database_path: PathBuf,

    /// SQLite pool size
    pub database_max_connections: u32,

    /// Require a verified bearer token on pet routes
    pub auth_enabled: bool,

    /// HS256 shared secret for bearer tokens
    pub jwt_secret: Option<String>,

    /// Expected `iss` claim, if any
    pub jwt_issuer: Option<String>,

    /// Expected `aud` claim, if any
    pub jwt_audience: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            port: lookup("PETSTORE_PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PETSTORE_PORT".to_string()))?,

            bind_addr: lookup("PETSTORE_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),

            store: lookup("PETSTORE_STORE")
                .unwrap_or_else(|| "sqlite".to_string())
                .parse()?,

            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),

            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,

            auth_enabled: lookup("AUTH_ENABLED")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("AUTH_ENABLED".to_string()))?,

            jwt_secret: lookup("JWT_SECRET").filter(|s| !s.is_empty()),

            jwt_issuer: lookup("JWT_ISSUER"),

            jwt_audience: lookup("JWT_AUDIENCE"),
        };

        if config.auth_enabled && config.jwt_secret.is_none() {
            return Err(ConfigError::MissingRequired("JWT_SECRET".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
