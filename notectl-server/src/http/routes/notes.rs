//! Note endpoints
//!
//! Each handler runs sanitize → validate → one gateway call → response.
//! Storage faults propagate as `ApiError::Storage` via `?`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::Note;
use crate::http::error::ApiError;
use crate::http::extractors::{NoteBody, NoteId};
use crate::http::server::AppState;

/// Existing clients expect 201 on a successful update, not 200.
const UPDATED_STATUS: StatusCode = StatusCode::CREATED;

/// GET / - list every note in id order
async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.store.read_all().await?;
    Ok(Json(notes))
}

/// GET /{id} - get a single note
async fn get_note(
    State(state): State<Arc<AppState>>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    state
        .store
        .read_one(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST / - create a note
async fn create_note(
    State(state): State<Arc<AppState>>,
    NoteBody(input): NoteBody,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let fields = input.into_fields()?;
    let note = state.store.create(&fields).await?;

    tracing::info!(id = note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /{id} - overwrite title, text and datetime of a note
async fn update_note(
    State(state): State<Arc<AppState>>,
    NoteId(id): NoteId,
    NoteBody(input): NoteBody,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let fields = input.into_fields()?;
    let note = state
        .store
        .update(id, &fields)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id, "note updated");
    Ok((UPDATED_STATUS, Json(note)))
}

/// DELETE /{id} - remove a note
async fn delete_note(
    State(state): State<Arc<AppState>>,
    NoteId(id): NoteId,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? {
        tracing::info!(id, "note deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Note routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/{id}", get(get_note).put(update_note).delete(delete_note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryNoteStore, NoteStore};
    use crate::models::NoteInput;

    fn state_with(store: Arc<MemoryNoteStore>) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(store)))
    }

    #[tokio::test]
    async fn create_skips_store_on_invalid_input() {
        let store = Arc::new(MemoryNoteStore::new());
        let result = create_note(
            state_with(store.clone()),
            NoteBody(NoteInput::new("", "text", "2024-01-01")),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let store = Arc::new(MemoryNoteStore::new());
        let result = update_note(
            state_with(store),
            NoteId(999),
            NoteBody(NoteInput::new("ok", "text", "never")),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = Arc::new(MemoryNoteStore::new());
        let result = update_note(
            state_with(store),
            NoteId(999),
            NoteBody(NoteInput::new("ok", "text", "2024-01-01")),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn update_uses_created_status() {
        let store = Arc::new(MemoryNoteStore::new());
        let fields = NoteInput::new("a", "b", "2024-01-01").into_fields().unwrap();
        let note = store.create(&fields).await.unwrap();

        let (status, Json(updated)) = update_note(
            state_with(store),
            NoteId(note.id),
            NoteBody(NoteInput::new("changed", "b", "2024-01-02")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(updated.title, "changed");
        assert_eq!(updated.datetime, "2024-01-02");
    }
}
