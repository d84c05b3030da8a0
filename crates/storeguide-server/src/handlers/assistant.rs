//! Language-understanding handler.

use axum::extract::State;
use axum::Json;

use crate::assistant;
use crate::error::ApiError;
use crate::schema::assistant::{AssistantRequest, AssistantResponse};
use crate::state::AppState;

/// Interprets one utterance into a reply, extracted products, and an
/// intent.
///
/// `POST /assistant`
///
/// Extracted products are merged with `currentProducts` following the
/// addition-cue rule; the offline keyword extractor answers when no
/// provider is configured.
pub async fn assist(
    State(state): State<AppState>,
    Json(req): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let interpretation = match &state.llm {
        Some(llm) => {
            assistant::interpret(llm, &req.message, &req.history, &req.current_products).await?
        }
        None => storeguide_session::interpret::offline(&state.catalog, &req.message),
    };

    let products =
        assistant::merge_with_current(&req.current_products, &req.message, &interpretation);

    Ok(Json(AssistantResponse {
        response: interpretation.response,
        products,
        intent: interpretation.intent,
    }))
}
