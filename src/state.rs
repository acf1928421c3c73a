use cloudpad_config::{CorsConfig, DatabaseConfig, JwtConfig};
use cloudpad_db::{StoreError, Stores};

#[derive(Clone, Debug)]
pub struct AppState {
    pub stores: Stores,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state(database: &DatabaseConfig) -> Result<AppState, StoreError> {
    Ok(AppState {
        stores: Stores::connect(database).await?,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}

#[cfg(any(test, feature = "test-utils"))]
impl AppState {
    /// State backed by a fresh in-memory store and a fixed signing secret.
    pub fn for_tests() -> Self {
        Self {
            stores: Stores::memory(),
            jwt_config: JwtConfig {
                secret: "test-secret-key-at-least-32-characters-long".to_string(),
                expiry: None,
            },
            cors_config: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }
}
