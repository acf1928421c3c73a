//! Request middleware and extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends the token in the `auth-token` header
//!    (`Authorization: Bearer <token>` is accepted too)
//! 2. [`auth::require_auth`] verifies it and attaches an [`auth::AuthUser`]
//!    to the request, or answers 401 without running the handler
//! 3. Handlers take `AuthUser` as an extractor
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, require_auth};
//!
//! let protected = Router::new()
//!     .route("/fetch-all-notes", get(fetch_all_notes))
//!     .route_layer(middleware::from_fn_with_state(state, require_auth));
//!
//! async fn fetch_all_notes(auth_user: AuthUser) -> impl IntoResponse {
//!     // auth_user.id is the verified caller
//! }
//! ```

pub mod auth;
