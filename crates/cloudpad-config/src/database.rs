//! Store backend configuration.
//!
//! The backend is chosen by the scheme of `DATABASE_URL`:
//!
//! - `postgres://` or `postgresql://`: PostgreSQL through a SQLx pool
//! - `memory://`: process-local maps, lost on restart
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size for PostgreSQL (default: 5)

use std::env;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub backend: DatabaseBackend,
    pub max_connections: u32,
}

// The URL can carry credentials.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("backend", &self.backend)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let backend = if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            DatabaseBackend::Postgres
        } else if url.starts_with("memory://") {
            DatabaseBackend::Memory
        } else {
            let scheme = url.split("://").next().unwrap_or_default().to_string();
            return Err(ConfigError::UnsupportedScheme(scheme));
        };

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            url,
            backend,
            max_connections,
        })
    }

    /// Configuration for the in-memory backend.
    pub fn memory() -> Self {
        Self {
            url: "memory://".to_string(),
            backend: DatabaseBackend::Memory,
            max_connections: 1,
        }
    }
}
