//! Wire types for the route computation endpoint.

use serde::{Deserialize, Serialize};

use storeguide_core::Route;

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub items: Vec<String>,
}

/// One polyline point, labeled `"<id>.<name>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoint {
    pub x: f64,
    pub y: f64,
    pub zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMapping {
    pub item: String,
    pub zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub route: Vec<RoutePoint>,
    /// Stop markers in visit order, formatted `"<id>.<name>"`.
    pub stops: Vec<String>,
    pub item_mapping: Vec<ItemMapping>,
}

impl RouteResponse {
    pub fn from_route(route: &Route) -> RouteResponse {
        RouteResponse {
            route: route
                .path
                .iter()
                .map(|p| RoutePoint {
                    x: p.x,
                    y: p.y,
                    zone: p.label.clone(),
                })
                .collect(),
            stops: route
                .stops
                .iter()
                .filter_map(|&id| {
                    route
                        .zone_name(id)
                        .map(|name| format!("{}.{}", id, name))
                })
                .collect(),
            item_mapping: route
                .item_zones
                .iter()
                .map(|iz| ItemMapping {
                    item: iz.item.clone(),
                    zone: iz.zone_label(),
                })
                .collect(),
        }
    }
}
