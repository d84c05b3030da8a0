//! Types for the external language-understanding collaborator.
//!
//! The collaborator's output is untrusted: fields may be missing or carry
//! unexpected values. Deserialization is lenient (defaulted fields,
//! unknown intents collapse to [`Intent::Other`]) so a malformed payload
//! degrades to "no products extracted" instead of an error.

use serde::{Deserialize, Serialize};

use storeguide_core::ZoneCatalog;

/// One prior exchange of the conversation, passed back to the
/// collaborator for context (at most the four most recent turns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

/// The collaborator's classification of the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Shopping,
    Greeting,
    Help,
    CommandInfo,
    ListInquiry,
    #[default]
    #[serde(other)]
    Other,
}

/// Structured result of a language-understanding call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interpretation {
    /// The spoken reply suggested by the collaborator.
    #[serde(default)]
    pub response: String,
    /// Product names extracted from the utterance.
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub intent: Intent,
}

/// Interprets an utterance without any collaborator, by catalog keyword
/// scan. This is the fallback used when no language-understanding
/// provider is configured.
pub fn offline(catalog: &ZoneCatalog, utterance: &str) -> Interpretation {
    let products = catalog.extract_keywords(utterance);
    if products.is_empty() {
        Interpretation {
            response: "Tell me what products you need, for example: \
                       I need milk and bread."
                .to_string(),
            products: Vec::new(),
            intent: Intent::Other,
        }
    } else {
        Interpretation {
            response: format!("Got it! {}.", products.join(" and ")),
            products,
            intent: Intent::Shopping,
        }
    }
}
