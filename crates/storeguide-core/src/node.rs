//! Store graph node data.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Role of a node within the store topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// The single store entry.
    Entry,
    /// A product zone where a shopper may stop.
    Zone,
    /// A navigation-only through-point with no products.
    Junction,
    /// One of the four terminal exits.
    Exit,
}

impl NodeRole {
    /// Derives the role from the id range convention (1 entry, 2-18 zones,
    /// 101-115 junctions, 201-204 exits).
    pub fn from_id(id: NodeId) -> NodeRole {
        if id.is_entry() {
            NodeRole::Entry
        } else if id.is_junction() {
            NodeRole::Junction
        } else if id.is_exit() {
            NodeRole::Exit
        } else {
            NodeRole::Zone
        }
    }
}

/// An immutable node of the store graph: identity, 2-D position in map
/// coordinates, display name, and role tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub role: NodeRole,
}

impl StoreNode {
    /// Creates a node, deriving the role from the id range.
    pub fn new(id: NodeId, x: f64, y: f64, name: impl Into<String>) -> StoreNode {
        StoreNode {
            id,
            x,
            y,
            name: name.into(),
            role: NodeRole::from_id(id),
        }
    }

    /// The `"<id>.<name>"` label used on path points and item mappings.
    pub fn label(&self) -> String {
        format!("{}.{}", self.id, self.name)
    }
}
