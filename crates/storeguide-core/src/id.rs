//! Stable node identifier for the store graph.
//!
//! `NodeId` is a newtype wrapper over `u32`. The numeric ranges are
//! load-bearing: ids 1-18 are the entry and product zones, 101-115 are
//! navigation junctions, and 201-204 are the four exits. The stop filter
//! (zones and exits count as stops, junctions do not) relies on these
//! ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the store graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The fixed store entry node.
    pub const ENTRY: NodeId = NodeId(1);

    /// The four fixed exit nodes.
    pub const EXITS: [NodeId; 4] = [NodeId(201), NodeId(202), NodeId(203), NodeId(204)];

    /// True for navigation-only junction nodes (101-115).
    pub fn is_junction(self) -> bool {
        (100..200).contains(&self.0)
    }

    /// True for the four exit nodes (201-204).
    pub fn is_exit(self) -> bool {
        (201..=204).contains(&self.0)
    }

    /// True for the entry node.
    pub fn is_entry(self) -> bool {
        self == Self::ENTRY
    }

    /// True for nodes that may appear in the final stop list: entry,
    /// product zones, and exits. Junctions are through-points only.
    pub fn is_stop(self) -> bool {
        !self.is_junction()
    }

    /// True for product zone nodes (2-18): stops that are neither the
    /// entry nor an exit.
    pub fn is_product_zone(self) -> bool {
        self.is_stop() && !self.is_entry() && !self.is_exit()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
