//! Token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification
//! accepts HS256 only; a token signed with any other algorithm is rejected
//! even if the secret matches.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use cloudpad_config::JwtConfig;
use cloudpad_core::AppError;

use crate::claims::Claims;

fn validation(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    if jwt_config.expiry.is_some() {
        validation.set_required_spec_claims(&["exp"]);
    } else {
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
    }
    validation
}

/// Issues a signed identity token for `user_id`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = jwt_config.expiry.map(|secs| now + secs as usize);

    let claims = Claims::new(user_id, now, exp);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns an unauthenticated error if the token is malformed, signed with a
/// different secret or algorithm, or (when expiry is configured) expired or
/// missing `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthenticated())
}

/// Verifies a token and resolves the user id it was issued for.
pub fn verify_user_id(token: &str, jwt_config: &JwtConfig) -> Result<Uuid, AppError> {
    verify_token(token, jwt_config)?
        .user_id()
        .ok_or_else(AppError::unauthenticated)
}
