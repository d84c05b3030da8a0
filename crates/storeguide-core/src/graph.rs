//! StoreGraph: the immutable store topology.
//!
//! [`StoreGraph`] holds the fixed set of store nodes (entry, product zones,
//! navigation junctions, exits) with 2-D coordinates and undirected
//! adjacency. Edges carry the Euclidean distance between their endpoints
//! as weight.
//!
//! The graph is built once at process start (see [`crate::layout`]) and is
//! read-only thereafter. Adjacency is symmetric by construction: edges are
//! added through [`StoreGraph::connect`], which deduplicates, so a
//! connection listed by either endpoint becomes a single undirected edge.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::NodeId;
use crate::node::{NodeRole, StoreNode};

/// The store topology: nodes with coordinates plus undirected weighted
/// adjacency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreGraph {
    /// Undirected topology; edge weights are Euclidean distances.
    graph: UnGraph<StoreNode, f64, u32>,
    /// Mapping from stable node id to petgraph index.
    index: HashMap<NodeId, NodeIndex<u32>>,
}

impl StoreGraph {
    /// Creates an empty graph. Use [`crate::layout::standard`] for the
    /// fixed store topology.
    pub fn new() -> StoreGraph {
        StoreGraph {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Adds a node. Errors if the id is already present.
    pub fn add_node(&mut self, node: StoreNode) -> Result<(), CoreError> {
        if self.index.contains_key(&node.id) {
            return Err(CoreError::DuplicateNode { id: node.id });
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(())
    }

    /// Connects two nodes with an undirected edge weighted by the
    /// Euclidean distance between them. Idempotent: reconnecting an
    /// existing pair keeps a single edge.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), CoreError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let weight = self.distance(a, b)?;
        self.graph.update_edge(ia, ib, weight);
        Ok(())
    }

    fn index_of(&self, id: NodeId) -> Result<NodeIndex<u32>, CoreError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(CoreError::UnknownNode { id })
    }

    /// True if the node id exists in the graph.
    pub fn exists(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Result<&StoreNode, CoreError> {
        let idx = self.index_of(id)?;
        Ok(&self.graph[idx])
    }

    /// Returns the node's 2-D coordinate.
    pub fn coordinate(&self, id: NodeId) -> Result<(f64, f64), CoreError> {
        let node = self.node(id)?;
        Ok((node.x, node.y))
    }

    /// Returns the ids adjacent to `id`, sorted ascending for
    /// deterministic iteration.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>, CoreError> {
        let idx = self.index_of(id)?;
        let mut out: Vec<NodeId> = self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].id)
            .collect();
        out.sort();
        Ok(out)
    }

    /// Euclidean distance between two nodes.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Result<f64, CoreError> {
        let (ax, ay) = self.coordinate(a)?;
        let (bx, by) = self.coordinate(b)?;
        Ok(((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
    }

    /// All node ids, sorted ascending.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.index.keys().copied().collect();
        ids.sort();
        ids
    }

    /// The store entry node id.
    pub fn entry_id(&self) -> NodeId {
        NodeId::ENTRY
    }

    /// The ids of the exit nodes present in the graph, sorted ascending.
    pub fn exit_ids(&self) -> Vec<NodeId> {
        self.node_ids()
            .into_iter()
            .filter(|id| id.is_exit())
            .collect()
    }

    /// The exit node closest (Euclidean) to `from`. Ties resolve to the
    /// lowest exit id.
    pub fn nearest_exit(&self, from: NodeId) -> Result<NodeId, CoreError> {
        let exits = self.exit_ids();
        if exits.is_empty() {
            return Err(CoreError::GraphInconsistency {
                reason: "graph has no exit nodes".to_string(),
            });
        }
        let mut best = exits[0];
        let mut best_dist = f64::INFINITY;
        for exit in exits {
            let dist = self.distance(from, exit)?;
            if dist < best_dist {
                best_dist = dist;
                best = exit;
            }
        }
        Ok(best)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Verifies the connectivity invariant: every zone node (and every
    /// exit) is reachable from the entry.
    pub fn validate(&self) -> Result<(), CoreError> {
        let entry = self.entry_id();
        let start = self.index_of(entry)?;

        let mut seen: HashSet<NodeIndex<u32>> = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        for id in self.node_ids() {
            let role = self.node(id)?.role;
            let must_reach = matches!(role, NodeRole::Zone | NodeRole::Exit);
            if must_reach && !seen.contains(&self.index_of(id)?) {
                return Err(CoreError::GraphInconsistency {
                    reason: format!("node {} is not reachable from the entry", id),
                });
            }
        }
        Ok(())
    }
}

impl Default for StoreGraph {
    fn default() -> Self {
        StoreGraph::new()
    }
}
