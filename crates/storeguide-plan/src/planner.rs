//! End-to-end route planning: free-text items to a finished [`Route`].

use storeguide_core::{ItemZone, NodeId, PathPoint, Route, StoreGraph, ZoneCatalog};

use crate::assembler::assemble;
use crate::error::PlanError;
use crate::sequencer::sequence;

/// Plans a route for the given items.
///
/// Items are mapped to zones through the catalog (first matching keyword
/// wins; unmatched items fall back to the entry zone). If nothing maps
/// beyond the entry, the result is a single-point route at the entry with
/// the fallback mappings still reported. Otherwise the zones are
/// sequenced (hint or nearest-neighbor fallback), the nearest exit is
/// appended, and the per-leg shortest paths are assembled into the full
/// polyline.
///
/// Empty input is an error: callers are expected to announce "no
/// products" instead of planning.
pub fn plan_route(
    graph: &StoreGraph,
    catalog: &ZoneCatalog,
    items: &[String],
    hint: Option<&[NodeId]>,
) -> Result<Route, PlanError> {
    if items.is_empty() {
        return Err(PlanError::EmptyItems);
    }

    let mut item_zones = Vec::with_capacity(items.len());
    for item in items {
        let zone = catalog.resolve(item);
        let zone_name = graph.node(zone)?.name.clone();
        item_zones.push(ItemZone {
            item: item.clone(),
            zone,
            zone_name,
        });
    }

    // Unique target zones in mapping order, entry excluded.
    let entry = graph.entry_id();
    let mut targets: Vec<NodeId> = Vec::new();
    for mapping in &item_zones {
        if mapping.zone != entry && !targets.contains(&mapping.zone) {
            targets.push(mapping.zone);
        }
    }

    if targets.is_empty() {
        // Nothing matched any catalog keyword: a single-point route at
        // the entry.
        let node = graph.node(entry)?;
        return Ok(Route {
            path: vec![PathPoint {
                x: node.x,
                y: node.y,
                label: node.label(),
            }],
            stops: vec![entry],
            item_zones,
        });
    }

    let stops = sequence(graph, &targets, hint)?;
    let full_path = assemble(graph, &stops)?;

    let mut path = Vec::with_capacity(full_path.len());
    for id in full_path {
        let node = graph.node(id)?;
        path.push(PathPoint {
            x: node.x,
            y: node.y,
            label: node.label(),
        });
    }

    Ok(Route {
        path,
        stops,
        item_zones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeguide_core::layout;

    fn plan(items: &[&str]) -> Route {
        let graph = layout::standard();
        let catalog = layout::standard_catalog();
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        plan_route(&graph, &catalog, &items, None).unwrap()
    }

    #[test]
    fn empty_items_are_an_error() {
        let graph = layout::standard();
        let catalog = layout::standard_catalog();
        assert!(matches!(
            plan_route(&graph, &catalog, &[], None),
            Err(PlanError::EmptyItems)
        ));
    }

    #[test]
    fn milk_and_bread_route() {
        let route = plan(&["milk", "bread"]);

        assert_eq!(route.stops[0], NodeId(1));
        assert!(route.stops.last().unwrap().is_exit());
        assert!(route.stops.contains(&NodeId(9))); // Dairy
        assert!(route.stops.contains(&NodeId(18))); // Pasta & Bakery

        // No junctions in stops; the polyline passes through them instead.
        assert!(route.stops.iter().all(|id| id.is_stop()));
        let traversed_junctions = route.path.iter().filter(|p| {
            p.label
                .split_once('.')
                .and_then(|(id, _)| id.parse::<u32>().ok())
                .map(|id| NodeId(id).is_junction())
                .unwrap_or(false)
        });
        assert!(traversed_junctions.count() > 0);

        assert_eq!(route.item_zones[0].zone_label(), "9.Dairy");
        assert_eq!(route.item_zones[1].zone_label(), "18.Pasta & Bakery");
    }

    #[test]
    fn requested_zones_appear_exactly_once_in_stops() {
        let route = plan(&["milk", "cheese", "bread", "apples"]);
        for zone in [NodeId(9), NodeId(18), NodeId(8)] {
            assert_eq!(
                route.stops.iter().filter(|&&s| s == zone).count(),
                1,
                "zone {} should appear once",
                zone
            );
        }
    }

    #[test]
    fn unmatched_items_fall_back_to_entry_point_route() {
        let route = plan(&["xyzzy-nonexistent-item"]);
        assert_eq!(route.stops, vec![NodeId(1)]);
        assert_eq!(route.path.len(), 1);
        assert_eq!(route.path[0].label, "1.Entry");
        assert_eq!(route.item_zones.len(), 1);
        assert_eq!(route.item_zones[0].zone, NodeId(1));
        assert_eq!(route.item_zones[0].zone_label(), "1.Entry");
    }

    #[test]
    fn valid_hint_controls_visit_order() {
        let graph = layout::standard();
        let catalog = layout::standard_catalog();
        let items = vec!["milk".to_string(), "vitamins".to_string()];
        // Visit Dairy before Health, against the nearest-neighbor order.
        let hint = vec![NodeId(1), NodeId(9), NodeId(4)];
        let route = plan_route(&graph, &catalog, &items, Some(&hint)).unwrap();
        assert_eq!(&route.stops[..3], &[NodeId(1), NodeId(9), NodeId(4)]);
    }

    #[test]
    fn path_polyline_is_consistent_with_stops() {
        let route = plan(&["milk", "bread"]);
        // Stops must appear in the polyline in the same order.
        let mut path_pos = 0;
        for stop in &route.stops {
            let prefix = format!("{}.", stop);
            let found = route.path[path_pos..]
                .iter()
                .position(|p| p.label.starts_with(&prefix));
            assert!(found.is_some(), "stop {} missing from polyline", stop);
            path_pos += found.unwrap();
        }
    }
}
