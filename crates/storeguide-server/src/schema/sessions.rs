//! Wire types for the session API.

use serde::Serialize;
use uuid::Uuid;

use storeguide_session::SessionPhase;

use super::route::RouteResponse;
use crate::sessions::{SessionEntry, TurnOutcome};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, serde::Deserialize)]
pub struct TurnRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    /// Spoken lines in speaking order.
    pub speech: Vec<String>,
    pub phase: SessionPhase,
    pub products: Vec<String>,
    /// Camera toggle requested this turn, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<bool>,
    pub route_available: bool,
}

impl TurnResponse {
    pub fn new(entry: &SessionEntry, outcome: TurnOutcome) -> TurnResponse {
        TurnResponse {
            speech: outcome.speech,
            phase: entry.session.phase(),
            products: entry.session.products().to_vec(),
            camera: outcome.camera,
            route_available: entry.session.route().is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    pub phase: SessionPhase,
    pub products: Vec<String>,
    pub route_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteResponse>,
}

impl SessionStateResponse {
    pub fn new(entry: &SessionEntry) -> SessionStateResponse {
        SessionStateResponse {
            phase: entry.session.phase(),
            products: entry.session.products().to_vec(),
            route_available: entry.session.route().is_some(),
            route: entry.session.route().map(RouteResponse::from_route),
        }
    }
}
