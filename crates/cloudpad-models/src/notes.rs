//! Note domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{NoteId, UserId};

/// Tag given to notes created without one.
pub const DEFAULT_TAG: &str = "General";

/// A note owned by exactly one user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Note {
    pub id: NoteId,
    #[sqlx(rename = "user_id")]
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

/// Input to the note store when creating a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub tag: String,
}

/// Fields to overwrite on an existing note. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.tag.is_none()
    }

    pub fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(tag) = &self.tag {
            note.tag = tag.clone();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNoteRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be of atleast 3 characters!"))]
    #[schema(example = "Shop")]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 5, message = "Description must be of atleast 5 characters!"))]
    #[schema(example = "Buy milk")]
    pub description: String,
    /// Free-form category. Defaults to "General".
    pub tag: Option<String>,
}

impl CreateNoteRequest {
    pub fn into_new_note(self, owner: UserId) -> NewNote {
        NewNote {
            owner,
            title: self.title,
            description: self.description,
            tag: non_blank(self.tag).unwrap_or_else(|| DEFAULT_TAG.to_string()),
        }
    }
}

/// Partial update. Absent and blank fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl UpdateNoteRequest {
    pub fn into_changes(self) -> NoteChanges {
        NoteChanges {
            title: non_blank(self.title),
            description: non_blank(self.description),
            tag: non_blank(self.tag),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteResponse {
    pub note: Note,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    #[serde(rename = "Success")]
    pub success: String,
    pub note: Note,
}

impl DeleteNoteResponse {
    pub fn new(note: Note) -> Self {
        Self {
            success: "Note has been deleted!".to_string(),
            note,
        }
    }
}

/// Blank and whitespace-only input counts as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
