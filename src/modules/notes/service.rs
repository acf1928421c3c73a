//! Note operations scoped to the calling user.
//!
//! Updates and deletes go through the store's owner-filtered writes. When
//! such a write matches nothing, a follow-up lookup decides between
//! `NotFound` (no note with that id) and `Forbidden` (someone else's note).

use tracing::{info, instrument};

use cloudpad_core::AppError;
use cloudpad_db::NoteStore;
use cloudpad_models::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest, UserId};

use crate::metrics::{track_note_operation, track_ownership_denied};

pub struct NotesService;

impl NotesService {
    #[instrument(skip(notes))]
    pub async fn fetch_all(notes: &dyn NoteStore, owner: UserId) -> Result<Vec<Note>, AppError> {
        Ok(notes.list_by_owner(owner).await?)
    }

    #[instrument(skip(notes))]
    pub async fn add(
        notes: &dyn NoteStore,
        owner: UserId,
        dto: CreateNoteRequest,
    ) -> Result<Note, AppError> {
        let note = notes.create(dto.into_new_note(owner)).await?;

        track_note_operation("created");
        info!(note_id = %note.id, "Note created");

        Ok(note)
    }

    #[instrument(skip(notes))]
    pub async fn update(
        notes: &dyn NoteStore,
        owner: UserId,
        id: &str,
        dto: UpdateNoteRequest,
    ) -> Result<Note, AppError> {
        let id = parse_note_id(id)?;

        match notes.update(id, owner, dto.into_changes()).await? {
            Some(note) => {
                track_note_operation("updated");
                Ok(note)
            }
            None => Err(write_miss(notes, id, "update").await?),
        }
    }

    #[instrument(skip(notes))]
    pub async fn delete(notes: &dyn NoteStore, owner: UserId, id: &str) -> Result<Note, AppError> {
        let id = parse_note_id(id)?;

        match notes.delete(id, owner).await? {
            Some(note) => {
                track_note_operation("deleted");
                info!(note_id = %note.id, "Note deleted");
                Ok(note)
            }
            None => Err(write_miss(notes, id, "delete").await?),
        }
    }
}

/// An id that is not a UUID cannot name any note.
fn parse_note_id(id: &str) -> Result<NoteId, AppError> {
    id.parse().map_err(|_| AppError::not_found())
}

async fn write_miss(
    notes: &dyn NoteStore,
    id: NoteId,
    operation: &'static str,
) -> Result<AppError, AppError> {
    match notes.find_by_id(id).await? {
        Some(_) => {
            track_ownership_denied(operation);
            Ok(AppError::forbidden())
        }
        None => Ok(AppError::not_found()),
    }
}
