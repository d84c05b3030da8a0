//! Session lifecycle and turn handlers.
//!
//! A turn takes the session entry out of the registry for its duration
//! instead of holding a map guard across the await points of the LLM
//! collaborators.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema::sessions::{
    CreateSessionResponse, SessionStateResponse, TurnRequest, TurnResponse,
};
use crate::sessions::{run_turn, SessionEntry};
use crate::state::AppState;

/// Creates a fresh session.
///
/// `POST /sessions`
pub async fn create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let session_id = Uuid::new_v4();
    state.sessions.insert(session_id, SessionEntry::default());
    tracing::info!("session {} created", session_id);
    Json(CreateSessionResponse { session_id })
}

/// Reports a session's phase, product list, and route.
///
/// `GET /sessions/{id}`
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStateResponse>, ApiError> {
    let entry = state
        .sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;
    Ok(Json(SessionStateResponse::new(&entry)))
}

/// Runs one conversational turn.
///
/// `POST /sessions/{id}/turn`
pub async fn session_turn(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let (_, mut entry) = state
        .sessions
        .remove(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;

    let outcome = run_turn(&state, &mut entry, &req.text).await;
    let response = TurnResponse::new(&entry, outcome);
    state.sessions.insert(id, entry);

    Ok(Json(response))
}

/// Deletes a session.
///
/// `DELETE /sessions/{id}`
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .sessions
        .remove(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;
    tracing::info!("session {} deleted", id);
    Ok(Json(serde_json::json!({ "success": true })))
}
