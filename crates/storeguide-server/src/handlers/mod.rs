//! HTTP handler modules.
//!
//! Handlers stay thin: parse the request, call into the plan/session
//! crates (and the LLM collaborators where configured), and shape the
//! JSON response. No dialogue or planning logic lives here.

pub mod assistant;
pub mod route;
pub mod sessions;
