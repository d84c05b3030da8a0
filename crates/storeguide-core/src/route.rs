//! Route: the result of planning a shopping trip.
//!
//! A `Route` carries the full walking polyline (every traversed node,
//! junctions included), the reduced ordered stop list (entry, product
//! zones, exit -- junctions excluded), and the item-to-zone mapping.
//! Routes are recomputed wholesale on every planning request and never
//! patched incrementally; installing a new route supersedes the previous
//! one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// One point of the walking polyline, labelled `"<id>.<name>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    /// `"<id>.<name>"` label of the traversed node.
    pub label: String,
}

/// Mapping from a requested item to the zone where it is found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemZone {
    /// The item as the shopper phrased it.
    pub item: String,
    pub zone: NodeId,
    pub zone_name: String,
}

impl ItemZone {
    /// `"<id>.<name>"` label of the mapped zone.
    pub fn zone_label(&self) -> String {
        format!("{}.{}", self.zone, self.zone_name)
    }
}

/// A planned route through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Every node traversed, in walking order, junctions included.
    pub path: Vec<PathPoint>,
    /// Ordered stops: entry first, then product zones in visit order,
    /// then the chosen exit. Never contains junctions.
    pub stops: Vec<NodeId>,
    /// Requested items mapped to their zones.
    pub item_zones: Vec<ItemZone>,
}

impl Route {
    /// The stops the shopper actually visits for products: everything in
    /// `stops` except the entry and the exits.
    pub fn product_stops(&self) -> Vec<NodeId> {
        self.stops
            .iter()
            .copied()
            .filter(|id| id.is_product_zone())
            .collect()
    }

    /// The exit stop, if the route has one.
    pub fn exit_stop(&self) -> Option<NodeId> {
        self.stops.iter().copied().find(|id| id.is_exit())
    }

    /// Looks up the path point for a node id via its `"<id>."` label
    /// prefix.
    pub fn point_for(&self, id: NodeId) -> Option<&PathPoint> {
        let prefix = format!("{}.", id);
        self.path.iter().find(|p| p.label.starts_with(&prefix))
    }

    /// The display name of a node on this route, parsed from its label.
    pub fn zone_name(&self, id: NodeId) -> Option<&str> {
        self.point_for(id)
            .and_then(|p| p.label.split_once('.'))
            .map(|(_, name)| name)
    }

    /// Groups requested items by zone, preserving item order within each
    /// zone.
    pub fn zone_products(&self) -> HashMap<NodeId, Vec<String>> {
        let mut out: HashMap<NodeId, Vec<String>> = HashMap::new();
        for mapping in &self.item_zones {
            out.entry(mapping.zone).or_default().push(mapping.item.clone());
        }
        out
    }
}
