//! Zone sequencer: visiting order over the requested zones.
//!
//! An external collaborator may propose an ordering (obtained from the
//! same language-model service used for product extraction). That hint is
//! untrusted free-text-adjacent output, so it is validated strictly: it
//! must start with the entry id and contain each requested zone exactly
//! once with no unknown ids. Anything else is discarded and the
//! deterministic nearest-neighbor fallback runs instead. The nearest of
//! the four exits is appended after the last zone.

use storeguide_core::{CoreError, NodeId, StoreGraph};

/// Produces the visiting order for `targets`: entry first, requested
/// zones in visit order, nearest exit last.
///
/// `hint` is an optional externally proposed ordering; invalid hints fall
/// back to nearest-neighbor sequencing. An empty target set (or one
/// containing only the entry) short-circuits to a single-stop route at
/// the entry.
pub fn sequence(
    graph: &StoreGraph,
    targets: &[NodeId],
    hint: Option<&[NodeId]>,
) -> Result<Vec<NodeId>, CoreError> {
    let entry = graph.entry_id();

    // Dedup while preserving order; the entry is never a target.
    let mut zones: Vec<NodeId> = Vec::new();
    for &zone in targets {
        if zone != entry && !zones.contains(&zone) {
            if !graph.exists(zone) {
                return Err(CoreError::UnknownNode { id: zone });
            }
            zones.push(zone);
        }
    }

    if zones.is_empty() {
        return Ok(vec![entry]);
    }

    let mut order = match hint {
        Some(proposed) if hint_is_valid(entry, &zones, proposed) => proposed.to_vec(),
        Some(proposed) => {
            tracing::warn!(
                proposed = ?proposed,
                "discarding invalid ordering hint, using nearest-neighbor fallback"
            );
            nearest_neighbor(graph, entry, &zones)?
        }
        None => nearest_neighbor(graph, entry, &zones)?,
    };

    let last = *order.last().expect("order always contains the entry");
    order.push(graph.nearest_exit(last)?);
    Ok(order)
}

/// A hint is valid when it starts with the entry and lists each requested
/// zone exactly once, with nothing else.
fn hint_is_valid(entry: NodeId, zones: &[NodeId], proposed: &[NodeId]) -> bool {
    if proposed.first() != Some(&entry) {
        return false;
    }
    let rest = &proposed[1..];
    if rest.len() != zones.len() {
        return false;
    }
    let mut remaining: Vec<NodeId> = zones.to_vec();
    for id in rest {
        match remaining.iter().position(|z| z == id) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    remaining.is_empty()
}

/// Deterministic nearest-neighbor ordering: from the entry, repeatedly
/// visit the closest unvisited zone. Ties resolve to the lowest id
/// because candidates are scanned in ascending order with a strict
/// less-than.
fn nearest_neighbor(
    graph: &StoreGraph,
    entry: NodeId,
    zones: &[NodeId],
) -> Result<Vec<NodeId>, CoreError> {
    let mut order = vec![entry];
    let mut remaining: Vec<NodeId> = zones.to_vec();
    remaining.sort();
    let mut current = entry;

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_dist = f64::INFINITY;
        for (pos, &zone) in remaining.iter().enumerate() {
            let dist = graph.distance(current, zone)?;
            if dist < best_dist {
                best_dist = dist;
                best_pos = pos;
            }
        }
        current = remaining.remove(best_pos);
        order.push(current);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storeguide_core::layout;

    #[test]
    fn empty_targets_short_circuit_to_entry() {
        let g = layout::standard();
        assert_eq!(sequence(&g, &[], None).unwrap(), vec![NodeId(1)]);
        assert_eq!(sequence(&g, &[NodeId(1)], None).unwrap(), vec![NodeId(1)]);
    }

    #[test]
    fn fallback_starts_at_entry_and_ends_at_an_exit() {
        let g = layout::standard();
        let order = sequence(&g, &[NodeId(9), NodeId(18), NodeId(4)], None).unwrap();
        assert_eq!(order[0], NodeId(1));
        assert!(order.last().unwrap().is_exit());
        // All three zones appear exactly once.
        for zone in [NodeId(4), NodeId(9), NodeId(18)] {
            assert_eq!(order.iter().filter(|&&z| z == zone).count(), 1);
        }
    }

    #[test]
    fn fallback_visits_nearest_zone_first() {
        let g = layout::standard();
        // Health (4) is much closer to the entry than Dairy (9).
        let order = sequence(&g, &[NodeId(9), NodeId(4)], None).unwrap();
        assert_eq!(&order[..3], &[NodeId(1), NodeId(4), NodeId(9)]);
    }

    #[test]
    fn valid_hint_is_used_verbatim() {
        let g = layout::standard();
        let hint = vec![NodeId(1), NodeId(9), NodeId(4)];
        let order = sequence(&g, &[NodeId(4), NodeId(9)], Some(&hint)).unwrap();
        assert_eq!(&order[..3], &[NodeId(1), NodeId(9), NodeId(4)]);
    }

    #[test]
    fn hint_missing_a_zone_is_discarded() {
        let g = layout::standard();
        let hint = vec![NodeId(1), NodeId(9)];
        let order = sequence(&g, &[NodeId(4), NodeId(9)], Some(&hint)).unwrap();
        // Fallback order: Health first (closer to entry).
        assert_eq!(&order[..3], &[NodeId(1), NodeId(4), NodeId(9)]);
    }

    #[test]
    fn hint_with_duplicates_is_discarded() {
        let g = layout::standard();
        let hint = vec![NodeId(1), NodeId(9), NodeId(9)];
        let order = sequence(&g, &[NodeId(4), NodeId(9)], Some(&hint)).unwrap();
        assert_eq!(&order[..3], &[NodeId(1), NodeId(4), NodeId(9)]);
    }

    #[test]
    fn hint_with_unknown_zone_is_discarded() {
        let g = layout::standard();
        let hint = vec![NodeId(1), NodeId(9), NodeId(99)];
        let order = sequence(&g, &[NodeId(4), NodeId(9)], Some(&hint)).unwrap();
        assert_eq!(&order[..3], &[NodeId(1), NodeId(4), NodeId(9)]);
    }

    #[test]
    fn hint_not_starting_at_entry_is_discarded() {
        let g = layout::standard();
        let hint = vec![NodeId(9), NodeId(4)];
        let order = sequence(&g, &[NodeId(4), NodeId(9)], Some(&hint)).unwrap();
        assert_eq!(order[0], NodeId(1));
    }

    #[test]
    fn nearest_exit_follows_the_last_zone() {
        let g = layout::standard();
        // Juices (11) last -> EXIT3 at the same y.
        let order = sequence(&g, &[NodeId(11)], None).unwrap();
        assert_eq!(order, vec![NodeId(1), NodeId(11), NodeId(203)]);
    }

    proptest! {
        /// The fallback always returns a permutation: entry first, each
        /// target exactly once, one exit last, regardless of input order.
        #[test]
        fn fallback_is_a_permutation(mut picks in proptest::collection::vec(2u32..19, 1..8)) {
            let g = layout::standard();
            let targets: Vec<NodeId> = picks.drain(..).map(NodeId).collect();

            let order = sequence(&g, &targets, None).unwrap();
            prop_assert_eq!(order[0], NodeId(1));
            prop_assert!(order.last().unwrap().is_exit());

            let mut unique: Vec<NodeId> = Vec::new();
            for &t in &targets {
                if !unique.contains(&t) {
                    unique.push(t);
                }
            }
            // order = entry + unique zones + exit
            prop_assert_eq!(order.len(), unique.len() + 2);
            for z in unique {
                prop_assert_eq!(order.iter().filter(|&&o| o == z).count(), 1);
            }
        }
    }
}
