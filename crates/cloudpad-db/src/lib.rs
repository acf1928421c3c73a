//! # Cloudpad DB
//!
//! Persistence for the Cloudpad API.
//!
//! Two interchangeable backends implement [`CredentialStore`] and
//! [`NoteStore`]:
//!
//! - [`PgStore`]: PostgreSQL through SQLx, selected by a `postgres://` URL
//! - [`MemoryStore`]: process-local, selected by `memory://`
//!
//! # Example
//!
//! ```ignore
//! use cloudpad_config::DatabaseConfig;
//! use cloudpad_db::Stores;
//!
//! let stores = Stores::connect(&DatabaseConfig::from_env()?).await?;
//! let notes = stores.notes.list_by_owner(user_id).await?;
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

use std::sync::Arc;

use cloudpad_config::{DatabaseBackend, DatabaseConfig};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{CredentialStore, NoteStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a PostgreSQL pool and applies pending migrations.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!(max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// The stores a running server works against.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn CredentialStore>,
    pub notes: Arc<dyn NoteStore>,
    pub backend: DatabaseBackend,
    pool: Option<PgPool>,
}

impl Stores {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = init_db_pool(config).await?;
                let store = Arc::new(PgStore::new(pool.clone()));

                Ok(Self {
                    users: store.clone(),
                    notes: store,
                    backend: DatabaseBackend::Postgres,
                    pool: Some(pool),
                })
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory store, data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }

    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            users: store.clone(),
            notes: store,
            backend: DatabaseBackend::Memory,
            pool: None,
        }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Checks that the backing database answers.
    pub async fn ping(&self) -> Result<(), StoreError> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
