//! HTTP/JSON API server for the in-store shopping guide.
//!
//! Exposes route planning and the voice-assistant dialogue over REST:
//! a stateless `/route` endpoint, a stateless `/assistant`
//! language-understanding endpoint, and a stateful session API that
//! drives the dialogue state machine turn by turn. The server performs
//! the side effects the session defers: product extraction through an
//! OpenAI-compatible provider (or an offline keyword extractor when no
//! provider is configured) and route planning with an optional
//! LLM-supplied visit-order hint.

pub mod assistant;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod order_hint;
pub mod router;
pub mod schema;
pub mod sessions;
pub mod state;
