//! Visit-order hint collaborator.
//!
//! Asks the provider for an efficient zone visit order before planning.
//! The hint is strictly optional: any transport, parse, or shape failure
//! degrades to `None` with a warning, and the planner falls back to
//! deterministic nearest-neighbor sequencing. Content validation of the
//! returned order (entry first, exactly the requested zones) happens in
//! the sequencer, not here.

use serde::Deserialize;
use serde_json::json;

use storeguide_core::{NodeId, StoreGraph, ZoneCatalog};

use crate::llm::LlmConfig;

#[derive(Debug, Deserialize)]
struct OrderPayload {
    order: Vec<u32>,
}

/// The distinct non-entry zones the given items map to, in mapping
/// order. This is the target set both for the hint prompt and for the
/// planner.
pub fn requested_zones(catalog: &ZoneCatalog, items: &[String]) -> Vec<NodeId> {
    let mut zones = Vec::new();
    for item in items {
        let zone = catalog.resolve(item);
        if !zone.is_entry() && !zones.contains(&zone) {
            zones.push(zone);
        }
    }
    zones
}

/// Fetches a visit-order hint for the given zones, or `None` on any
/// failure.
pub async fn fetch_order_hint(
    llm: &LlmConfig,
    graph: &StoreGraph,
    zones: &[NodeId],
) -> Option<Vec<NodeId>> {
    if zones.is_empty() {
        return None;
    }

    let zone_list = zones
        .iter()
        .filter_map(|&id| {
            let node = graph.node(id).ok()?;
            Some(format!("{} ({} at x:{}, y:{})", id, node.name, node.x, node.y))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let entry = graph.node(graph.entry_id()).ok()?;
    let prompt = format!(
        "You are a route optimizer. Given these product zones in a supermarket, \
         determine the most efficient order to visit them to minimize walking distance.\n\
         \n\
         ZONES TO VISIT: {}\n\
         \n\
         START: Zone {} ({} at x:{}, y:{})\n\
         \n\
         Consider:\n\
         - Start at zone {}\n\
         - Minimize backtracking\n\
         - Visit nearby zones in sequence\n\
         - Euclidean distance between points\n\
         \n\
         Return ONLY a JSON array of zone IDs in optimal visit order, starting with {}:\n\
         {{\"order\": [{}, ...]}}",
        zone_list,
        entry.id,
        entry.name,
        entry.x,
        entry.y,
        entry.id,
        entry.id,
        entry.id,
    );

    let messages = [
        json!({ "role": "system", "content": "You are a route optimizer." }),
        json!({ "role": "user", "content": prompt }),
    ];

    let content = match llm.chat_json(&messages, 0.1).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("order hint request failed, using fallback sequencing: {}", err);
            return None;
        }
    };

    match serde_json::from_str::<OrderPayload>(&content) {
        Ok(payload) => Some(payload.order.into_iter().map(NodeId).collect()),
        Err(err) => {
            tracing::warn!("order hint payload malformed, using fallback sequencing: {}", err);
            None
        }
    }
}
