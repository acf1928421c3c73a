//! # Cloudpad Auth
//!
//! Stateless identity tokens for the Cloudpad API.
//!
//! - [`claims`]: the token payload, `{"user": {"id": ...}, "iat": ...}`
//! - [`jwt`]: HS256 token issuing and verification
//!
//! Tokens are not persisted and cannot be revoked. Unless
//! `JWT_EXPIRY_SECONDS` is configured they also carry no `exp` claim and
//! remain valid for as long as the signing secret is unchanged.
//!
//! # Example
//!
//! ```ignore
//! use cloudpad_auth::{create_token, verify_user_id};
//! use cloudpad_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(user_id, &config)?;
//! assert_eq!(verify_user_id(&token, &config)?, user_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, UserClaim};
pub use jwt::{create_token, verify_token, verify_user_id};
