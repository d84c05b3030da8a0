//! Wire types for the language-understanding endpoint.

use serde::{Deserialize, Serialize};

use storeguide_session::{ChatTurn, Intent};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub current_products: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub response: String,
    pub products: Vec<String>,
    pub intent: Intent,
}
