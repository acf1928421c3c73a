//! In-memory backend.
//!
//! Selected with `DATABASE_URL=memory://`. Data lives for the lifetime of the
//! process. Each map sits behind its own `RwLock`; a registration holds the
//! users write lock across its email check and insert, so two concurrent
//! registrations of one email cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use cloudpad_models::{NewNote, NewUser, Note, NoteChanges, NoteId, User, UserCredentials, UserId};

use crate::error::StoreError;
use crate::store::{CredentialStore, NoteStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserCredentials>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let credentials = UserCredentials {
            id: UserId::new(),
            name: user.name,
            email: user.email,
            password: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(credentials.clone());

        Ok(credentials.into_user())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .map(UserCredentials::into_user))
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let note = Note {
            id: NoteId::new(),
            owner: note.owner,
            title: note.title,
            description: note.description,
            tag: note.tag,
            created_at: Utc::now(),
        };
        self.notes.write().await.push(note.clone());

        Ok(note)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.owner == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn update(
        &self,
        id: NoteId,
        owner: UserId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|n| n.id == id && n.owner == owner) else {
            return Ok(None);
        };

        changes.apply(note);
        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        let position = notes.iter().position(|n| n.id == id && n.owner == owner);

        Ok(position.map(|index| notes.remove(index)))
    }
}
