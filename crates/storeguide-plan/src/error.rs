//! Error types for the planning engine.

use storeguide_core::CoreError;
use thiserror::Error;

/// Errors produced while planning a route.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A route was requested with no items.
    #[error("cannot plan a route without items")]
    EmptyItems,

    /// An underlying graph or catalog error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
