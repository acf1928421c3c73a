use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cloudpad_core::AppError;
use cloudpad_models::{
    CreateNoteRequest, DeleteNoteResponse, Note, UpdateNoteRequest, UpdateNoteResponse,
};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::{ErrorResponse, ValidationErrorResponse};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::NotesService;

/// List the caller's notes
#[utoipa::path(
    get,
    path = "/api/notes/fetch-all-notes",
    responses(
        (status = 200, description = "The caller's notes in creation order", body = Vec<Note>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn fetch_all_notes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = NotesService::fetch_all(state.stores.notes.as_ref(), auth_user.id).await?;
    Ok(Json(notes))
}

/// Create a note owned by the caller
#[utoipa::path(
    post,
    path = "/api/notes/add-note",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = Note),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn add_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    let note = NotesService::add(state.stores.notes.as_ref(), auth_user.id, dto).await?;
    Ok(Json(note))
}

/// Update fields of one of the caller's notes
#[utoipa::path(
    patch,
    path = "/api/notes/update-note/{id}",
    params(("id" = String, Path, description = "Note id")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = UpdateNoteResponse),
        (status = 401, description = "Missing token or note owned by another user", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn update_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    body: Option<ValidatedJson<UpdateNoteRequest>>,
) -> Result<Json<UpdateNoteResponse>, AppError> {
    // A missing body is an empty update.
    let dto = body.map(|ValidatedJson(dto)| dto).unwrap_or_default();
    let note = NotesService::update(state.stores.notes.as_ref(), auth_user.id, &id, dto).await?;
    Ok(Json(UpdateNoteResponse { note }))
}

/// Delete one of the caller's notes
#[utoipa::path(
    delete,
    path = "/api/notes/delete-note/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteResponse),
        (status = 401, description = "Missing token or note owned by another user", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notes",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, AppError> {
    let note = NotesService::delete(state.stores.notes.as_ref(), auth_user.id, &id).await?;
    Ok(Json(DeleteNoteResponse::new(note)))
}
