//! Route assembler: stitches per-leg shortest paths into one polyline.

use storeguide_core::{CoreError, NodeId, StoreGraph};

use crate::dijkstra::shortest_path;

/// Concatenates the shortest paths between consecutive stops into one
/// continuous node sequence, dropping the duplicated joint where one
/// leg's end is the next leg's start.
///
/// An unreachable leg is skipped with a warning rather than aborting the
/// route: the graph is static and reachability is expected to always hold,
/// so a gap is an accepted degradation, not a fatal error.
pub fn assemble(graph: &StoreGraph, stops: &[NodeId]) -> Result<Vec<NodeId>, CoreError> {
    let mut full_path: Vec<NodeId> = Vec::new();

    if stops.len() == 1 {
        return Ok(vec![stops[0]]);
    }

    for pair in stops.windows(2) {
        let segment = shortest_path(graph, pair[0], pair[1])?;
        if segment.is_empty() {
            tracing::warn!(from = %pair[0], to = %pair[1], "no path between stops, skipping leg");
            continue;
        }
        if full_path.is_empty() {
            full_path.extend(segment);
        } else if full_path.last() == segment.first() {
            full_path.extend(segment.into_iter().skip(1));
        } else {
            // Previous leg was skipped; the polyline has a gap here.
            full_path.extend(segment);
        }
    }

    Ok(full_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeguide_core::{layout, StoreNode};

    #[test]
    fn single_stop_is_a_point() {
        let g = layout::standard();
        assert_eq!(assemble(&g, &[NodeId(1)]).unwrap(), vec![NodeId(1)]);
    }

    #[test]
    fn joints_are_not_duplicated() {
        let g = layout::standard();
        let path = assemble(&g, &[NodeId(1), NodeId(4), NodeId(201)]).unwrap();
        assert_eq!(path.first(), Some(&NodeId(1)));
        assert_eq!(path.last(), Some(&NodeId(201)));
        // The joint (zone 4) appears once even though it ends one leg and
        // starts the next.
        assert_eq!(path.iter().filter(|&&id| id == NodeId(4)).count(), 1);
    }

    #[test]
    fn consecutive_points_are_adjacent() {
        let g = layout::standard();
        let path = assemble(&g, &[NodeId(1), NodeId(9), NodeId(18), NodeId(204)]).unwrap();
        for pair in path.windows(2) {
            assert!(
                g.neighbors(pair[0]).unwrap().contains(&pair[1]),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn unreachable_leg_is_skipped() {
        let mut g = layout::standard();
        g.add_node(StoreNode::new(NodeId(50), 500.0, 500.0, "Annex")).unwrap();

        let path = assemble(&g, &[NodeId(1), NodeId(50), NodeId(9)]).unwrap();
        // Leg 1 -> 50 is skipped; leg 50 -> 9 is skipped too. Nothing
        // assembles, but the call does not fail.
        assert!(path.is_empty());

        let path = assemble(&g, &[NodeId(1), NodeId(4), NodeId(50)]).unwrap();
        // First leg survives, second is dropped.
        assert_eq!(path.first(), Some(&NodeId(1)));
        assert_eq!(path.last(), Some(&NodeId(4)));
    }
}
