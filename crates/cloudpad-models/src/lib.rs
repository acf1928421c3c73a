//! # Cloudpad Models
//!
//! Domain models and DTOs for the Cloudpad API.
//!
//! - [`ids`]: strongly-typed `UserId` / `NoteId`
//! - [`users`]: users and stored credentials
//! - [`auth`]: registration and login DTOs
//! - [`notes`]: notes, partial updates and note DTOs

pub mod auth;
pub mod ids;
pub mod notes;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthTokenResponse, LoginRequest, RegisterRequest};
pub use ids::{NoteId, UserId};
pub use notes::{
    CreateNoteRequest, DEFAULT_TAG, DeleteNoteResponse, NewNote, Note, NoteChanges,
    UpdateNoteRequest, UpdateNoteResponse,
};
pub use users::{NewUser, User, UserCredentials};
