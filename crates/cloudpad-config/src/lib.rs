//! # Cloudpad Config
//!
//! Configuration types for the Cloudpad API, loaded from environment
//! variables once at startup and shared read-only afterwards.
//!
//! - [`jwt`]: token signing secret and optional expiry
//! - [`database`]: store backend selection and pool sizing
//! - [`cors`]: allowed browser origins
//! - [`server`]: bind address
//!
//! Every config type exposes `from_env()` plus a `from_lookup()` that takes
//! any `Fn(&str) -> Option<String>`, so tests can feed values without
//! touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use cloudpad_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::{ConfigError, DatabaseBackend, DatabaseConfig};
pub use jwt::JwtConfig;
pub use server::ServerConfig;
