//! Language-understanding collaborator: product extraction and small
//! talk.
//!
//! [`interpret`] calls the chat provider in JSON mode with the assistant
//! system prompt and parses the reply leniently: a structurally broken
//! payload degrades to an empty [`Interpretation`] instead of an error.
//! The no-provider fallback is `storeguide_session::interpret::offline`.

use serde_json::json;

use storeguide_session::command::has_addition_cue;
use storeguide_session::{ChatTurn, Intent, Interpretation};

use crate::error::ApiError;
use crate::llm::LlmConfig;

/// Prior turns forwarded to the provider for context.
const HISTORY_WINDOW: usize = 4;

const SYSTEM_PROMPT: &str = r#"You are a friendly supermarket voice assistant.

Your job:
1. Extract product names from user input
2. Give SHORT responses (1-2 sentences) for shopping requests
3. Give CLEAR, SPECIFIC instructions when asked for help
4. Always tell users the EXACT phrases to say
5. When users ask about their list, suggest calculating the route if they have products

EXACT Commands to teach users:
- Add products: "I need milk and bread" or "Add apples"
- Confirm list: "Yes"
- Add more: "Add cheese" or "Also apples"
- Remove item: "Remove milk"
- Clear all: "Remove all"
- Hear route: "Repeat"
- Calculate/Generate route: "Calculate route" or "Generate route"
- Navigate: "Start navigation" then "Next zone"
- Camera: "Camera on" or "Camera off"
- Finish: "Thank you"

Rules:
- For shopping: Keep it brief
- For help: Give step-by-step instructions with exact phrases
- Extract ALL products mentioned
- When the user asks about their list, remind them they can say "Calculate route" to generate the optimal path

Response format (JSON):
{
  "response": "Your spoken response",
  "products": ["product1", "product2"],
  "intent": "shopping" or "greeting" or "help" or "command_info" or "list_inquiry"
}

Examples:
"I need milk and bread" -> {"response": "Got it! Milk and bread.", "products": ["milk", "bread"], "intent": "shopping"}
"Help me" -> {"response": "Say I need milk and bread to start a list. When I ask, say Yes to confirm. Say Repeat to hear the route, Start navigation for steps, Thank you to finish.", "products": [], "intent": "help"}
"What's on my list?" -> {"response": "Let me check your list. Would you like me to calculate the route? Just say Calculate route when ready.", "products": [], "intent": "list_inquiry"}"#;

/// Calls the provider to interpret one utterance.
pub async fn interpret(
    llm: &LlmConfig,
    message: &str,
    history: &[ChatTurn],
    current_products: &[String],
) -> Result<Interpretation, ApiError> {
    let mut messages = vec![json!({ "role": "system", "content": SYSTEM_PROMPT })];

    if !current_products.is_empty() {
        messages.push(json!({
            "role": "system",
            "content": format!(
                "User already shopping for: {}. If they say \"also\" or \"add\", combine with these.",
                current_products.join(", ")
            ),
        }));
    }

    let recent = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[recent..] {
        messages.push(json!({ "role": turn.role, "content": turn.content }));
    }
    messages.push(json!({ "role": "user", "content": message }));

    let content = llm.chat_json(&messages, 0.3).await?;

    // Lenient parse: a broken payload means "no products extracted".
    let interpretation = serde_json::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!("malformed interpretation payload, using defaults: {}", err);
        Interpretation::default()
    });
    Ok(interpretation)
}

/// Merges freshly extracted products with the caller's current list.
///
/// The current list is kept (and extended) when the intent is shopping
/// and the utterance carries an addition cue or anything was extracted;
/// otherwise the extraction stands alone. Duplicates are suppressed
/// case-insensitively.
pub fn merge_with_current(
    current: &[String],
    message: &str,
    interpretation: &Interpretation,
) -> Vec<String> {
    let extracted = &interpretation.products;
    if current.is_empty() || interpretation.intent != Intent::Shopping {
        return extracted.clone();
    }
    if !has_addition_cue(&message.to_lowercase()) && extracted.is_empty() {
        return extracted.clone();
    }

    let mut merged: Vec<String> = current.to_vec();
    for product in extracted {
        let lowered = product.to_lowercase();
        if !merged.iter().any(|p| p.to_lowercase() == lowered) {
            merged.push(product.clone());
        }
    }
    merged
}
