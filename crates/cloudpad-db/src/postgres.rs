//! PostgreSQL backend.
//!
//! Email uniqueness is the `users_email_key` constraint; a unique violation
//! on insert is reported as [`StoreError::DuplicateEmail`]. Notes are listed
//! by the `seq` identity column, which follows insertion order.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cloudpad_models::{NewNote, NewUser, Note, NoteChanges, NoteId, User, UserCredentials, UserId};

use crate::error::StoreError;
use crate::store::{CredentialStore, NoteStore};

const NOTE_COLUMNS: &str = "id, user_id, title, description, tag, created_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, StoreError> {
        let user = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, name, email, password, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, name, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, created_at"#,
        )
        .bind(UserId::new())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return StoreError::DuplicateEmail;
            }
            StoreError::from(e)
        })
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    #[instrument(skip(self))]
    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let query = format!(
            r#"INSERT INTO notes (id, user_id, title, description, tag)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {NOTE_COLUMNS}"#
        );

        let note = sqlx::query_as::<_, Note>(&query)
            .bind(NoteId::new())
            .bind(note.owner)
            .bind(&note.title)
            .bind(&note.description)
            .bind(&note.tag)
            .fetch_one(&self.pool)
            .await?;

        Ok(note)
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY seq");

        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;

        Ok(notes)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");

        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: NoteId,
        owner: UserId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError> {
        let query = format!(
            r#"UPDATE notes
               SET title = COALESCE($3, title),
                   description = COALESCE($4, description),
                   tag = COALESCE($5, tag)
               WHERE id = $1 AND user_id = $2
               RETURNING {NOTE_COLUMNS}"#
        );

        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.tag)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: NoteId, owner: UserId) -> Result<Option<Note>, StoreError> {
        let query =
            format!("DELETE FROM notes WHERE id = $1 AND user_id = $2 RETURNING {NOTE_COLUMNS}");

        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }
}
