//! Core error types for storeguide-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! failure modes in the graph model and catalog.

use crate::id::NodeId;
use thiserror::Error;

/// Core errors produced by the storeguide-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node id was queried that does not exist in the graph.
    #[error("unknown node: NodeId({id})", id = id.0)]
    UnknownNode { id: NodeId },

    /// The same node id was inserted twice during graph construction.
    #[error("duplicate node: NodeId({id})", id = id.0)]
    DuplicateNode { id: NodeId },

    /// A graph invariant was violated (connectivity, reachability).
    #[error("graph inconsistency: {reason}")]
    GraphInconsistency { reason: String },

    /// A catalog entry references a node id that is not a zone in the graph.
    #[error("catalog keyword '{keyword}' maps to invalid zone NodeId({id})", id = id.0)]
    InvalidCatalogZone { keyword: String, id: NodeId },
}
