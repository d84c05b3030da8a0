//! Single-pair shortest path over the store graph.
//!
//! Classic Dijkstra with a linear scan for the minimum tentative distance.
//! O(V^2) is fine at this graph size (tens of nodes); the scan iterates
//! ids in ascending order, which makes the tie-break deterministic within
//! a run.

use std::collections::HashMap;

use storeguide_core::{CoreError, NodeId, StoreGraph};

/// Computes the shortest path from `start` to `end`, inclusive of both
/// endpoints, weighted by Euclidean edge distance.
///
/// Returns `Ok(vec![start])` when `start == end` and `Ok(vec![])` when
/// `end` is unreachable. Unknown endpoints are an error.
pub fn shortest_path(
    graph: &StoreGraph,
    start: NodeId,
    end: NodeId,
) -> Result<Vec<NodeId>, CoreError> {
    if !graph.exists(start) {
        return Err(CoreError::UnknownNode { id: start });
    }
    if !graph.exists(end) {
        return Err(CoreError::UnknownNode { id: end });
    }

    // node_ids() is sorted ascending, which fixes the tie-break order.
    let ids = graph.node_ids();
    let mut dist: HashMap<NodeId, f64> = ids.iter().map(|&id| (id, f64::INFINITY)).collect();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut unvisited: Vec<NodeId> = ids;
    dist.insert(start, 0.0);

    while !unvisited.is_empty() {
        // Linear scan for the unvisited node with minimal tentative distance.
        let mut current: Option<(usize, NodeId)> = None;
        let mut min_dist = f64::INFINITY;
        for (pos, &id) in unvisited.iter().enumerate() {
            if dist[&id] < min_dist {
                min_dist = dist[&id];
                current = Some((pos, id));
            }
        }

        let (pos, current) = match current {
            // No unvisited node has finite distance: graph exhausted.
            None => break,
            Some(found) => found,
        };
        if current == end {
            break;
        }
        // Plain remove keeps the vector sorted, so the scan above always
        // settles equal-distance ties on the lower id.
        unvisited.remove(pos);

        let base = dist[&current];
        for neighbor in graph.neighbors(current)? {
            if !unvisited.contains(&neighbor) {
                continue;
            }
            let alt = base + graph.distance(current, neighbor)?;
            if alt < dist[&neighbor] {
                dist.insert(neighbor, alt);
                prev.insert(neighbor, current);
            }
        }
    }

    if dist[&end].is_infinite() {
        return Ok(Vec::new());
    }

    // Reconstruct by walking predecessors back from the target.
    let mut path = vec![end];
    let mut cursor = end;
    while let Some(&p) = prev.get(&cursor) {
        path.push(p);
        cursor = p;
    }
    path.reverse();

    if path[0] == start {
        Ok(path)
    } else {
        Ok(Vec::new())
    }
}

/// Total Euclidean length of a node sequence.
pub fn path_cost(graph: &StoreGraph, path: &[NodeId]) -> Result<f64, CoreError> {
    let mut cost = 0.0;
    for pair in path.windows(2) {
        cost += graph.distance(pair[0], pair[1])?;
    }
    Ok(cost)
}
