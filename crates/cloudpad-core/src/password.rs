//! Password hashing backed by bcrypt.
//!
//! Every call to [`hash_password`] draws a fresh random salt, so hashing the
//! same password twice yields two different strings. The output is a
//! self-describing `$2b$` string that carries its own cost and salt, which is
//! all [`verify_password`] needs.

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor applied to every new hash.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Hashes a plaintext password with a fresh salt.
///
/// # Errors
///
/// Returns an internal error if bcrypt cannot produce a hash (for example
/// when the system entropy source is unavailable).
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch. A stored hash that is not a valid bcrypt
/// string is an internal error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}
