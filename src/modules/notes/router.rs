use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{add_note, delete_note, fetch_all_notes, update_note};

pub fn init_notes_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all-notes", get(fetch_all_notes))
        .route("/add-note", post(add_note))
        .route("/update-note/{id}", patch(update_note))
        .route("/delete-note/{id}", delete(delete_note))
}
