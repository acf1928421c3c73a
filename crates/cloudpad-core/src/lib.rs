//! # Cloudpad Core
//!
//! Core types shared by every Cloudpad crate.
//!
//! - [`errors`]: the application error taxonomy and its HTTP mapping
//! - [`password`]: salted password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use cloudpad_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret")?;
//! assert!(verify_password("secret", &hash)?);
//!
//! let error = AppError::not_found();
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, FieldError};
pub use password::{hash_password, verify_password};
