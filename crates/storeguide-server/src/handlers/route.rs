//! Route computation handler.

use axum::extract::State;
use axum::Json;

use storeguide_plan::plan_route;

use crate::error::ApiError;
use crate::order_hint;
use crate::schema::route::{RouteRequest, RouteResponse};
use crate::state::AppState;

/// Plans a route over the requested items.
///
/// `POST /route`
///
/// When a provider is configured a visit-order hint is fetched first;
/// hint failure or rejection falls back to deterministic sequencing.
pub async fn compute_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let hint = match &state.llm {
        Some(llm) => {
            let zones = order_hint::requested_zones(&state.catalog, &req.items);
            order_hint::fetch_order_hint(llm, &state.graph, &zones).await
        }
        None => None,
    };

    let route = plan_route(&state.graph, &state.catalog, &req.items, hint.as_deref())?;
    Ok(Json(RouteResponse::from_route(&route)))
}
