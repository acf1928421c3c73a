//! Store traits.
//!
//! Ownership is enforced by the note store's write operations themselves:
//! `update` and `delete` only touch a note whose id *and* owner match, in a
//! single conditional write. Callers that need to tell "absent" from "owned
//! by someone else" follow up with [`NoteStore::find_by_id`].

use async_trait::async_trait;
use cloudpad_models::{NewNote, NewUser, Note, NoteChanges, NoteId, User, UserCredentials, UserId};

use crate::error::StoreError;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a user together with the stored password hash.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, StoreError>;

    /// Inserts a user.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken, also
    /// when a concurrent registration took it after the caller's own check.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(&self, note: NewNote) -> Result<Note, StoreError>;

    /// All notes of `owner` in insertion order.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError>;

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError>;

    /// Applies `changes` to the note `id` if it belongs to `owner` and
    /// returns the updated note. `None` when no such note exists.
    async fn update(
        &self,
        id: NoteId,
        owner: UserId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError>;

    /// Deletes the note `id` if it belongs to `owner` and returns it.
    /// `None` when no such note exists.
    async fn delete(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError>;
}
