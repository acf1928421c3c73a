use tracing::{info, instrument};

use cloudpad_auth::create_token;
use cloudpad_config::JwtConfig;
use cloudpad_core::{AppError, hash_password, verify_password};
use cloudpad_db::{CredentialStore, StoreError};
use cloudpad_models::{LoginRequest, NewUser, RegisterRequest, User, UserId};

use crate::metrics::{
    track_jwt_issued, track_user_created, track_user_login_failure, track_user_login_success,
};

pub struct AuthService;

impl AuthService {
    /// Registers a user and returns a token for the new account.
    #[instrument(skip(users, jwt_config))]
    pub async fn create_user(
        users: &dyn CredentialStore,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        if users.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::duplicate_email());
        }

        let password_hash = hash_password(&dto.password)?;

        let user = users
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                StoreError::DuplicateEmail => AppError::duplicate_email(),
                other => AppError::internal(other),
            })?;

        track_user_created();
        info!(user_id = %user.id, "User registered");

        Self::issue_token(user.id, jwt_config)
    }

    /// Exchanges valid credentials for a token.
    ///
    /// An unknown email and a wrong password fail identically.
    #[instrument(skip(users, jwt_config))]
    pub async fn login(
        users: &dyn CredentialStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let Some(credentials) = users.find_by_email(&dto.email).await? else {
            track_user_login_failure("unknown_email");
            return Err(AppError::bad_credentials());
        };

        if !verify_password(&dto.password, &credentials.password)? {
            track_user_login_failure("wrong_password");
            return Err(AppError::bad_credentials());
        }

        track_user_login_success();
        Self::issue_token(credentials.id, jwt_config)
    }

    #[instrument(skip(users))]
    pub async fn user_details(users: &dyn CredentialStore, id: UserId) -> Result<User, AppError> {
        users.find_by_id(id).await?.ok_or_else(AppError::not_found)
    }

    fn issue_token(id: UserId, jwt_config: &JwtConfig) -> Result<String, AppError> {
        let token = create_token(id.into_inner(), jwt_config)?;
        track_jwt_issued();
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudpad_auth::verify_user_id;
    use cloudpad_core::ErrorKind;
    use cloudpad_db::MemoryStore;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "service-test-secret".to_string(),
            expiry: None,
        }
    }

    fn register(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ann".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_keeps_first_user() {
        let store = MemoryStore::new();
        let config = jwt_config();

        let token = AuthService::create_user(&store, register("a@x.com"), &config)
            .await
            .unwrap();
        let first_id = verify_user_id(&token, &config).unwrap();

        let err = AuthService::create_user(&store, register("a@x.com"), &config)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);

        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id.into_inner(), first_id);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let store = MemoryStore::new();
        AuthService::create_user(&store, register("a@x.com"), &jwt_config())
            .await
            .unwrap();

        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password, "secret");
        assert!(verify_password("secret", &stored.password).unwrap());
    }

    #[tokio::test]
    async fn test_login_resolves_to_registered_user() {
        let store = MemoryStore::new();
        let config = jwt_config();
        let registered = AuthService::create_user(&store, register("a@x.com"), &config)
            .await
            .unwrap();

        let token = AuthService::login(&store, login("a@x.com", "secret"), &config)
            .await
            .unwrap();

        assert_eq!(
            verify_user_id(&token, &config).unwrap(),
            verify_user_id(&registered, &config).unwrap()
        );
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = MemoryStore::new();
        let config = jwt_config();
        AuthService::create_user(&store, register("a@x.com"), &config)
            .await
            .unwrap();

        let wrong_password = AuthService::login(&store, login("a@x.com", "wrong"), &config)
            .await
            .unwrap_err();
        let unknown_email = AuthService::login(&store, login("b@x.com", "secret"), &config)
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::BadCredentials);
        assert_eq!(unknown_email.kind, ErrorKind::BadCredentials);
        assert_eq!(wrong_password.error.to_string(), unknown_email.error.to_string());
    }

    #[tokio::test]
    async fn test_user_details_for_unknown_id() {
        let store = MemoryStore::new();
        let err = AuthService::user_details(&store, UserId::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
