//! End-to-end integration tests for the shopping guide HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler
//! -> planner/session -> HTTP response. No provider is configured, so
//! extraction uses the offline catalog keyword scan and sequencing is
//! deterministic nearest-neighbor; that keeps every test offline and
//! reproducible.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to
//! the router without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use storeguide_server::router::build_router;
use storeguide_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router without an LLM provider.
fn test_app() -> Router {
    build_router(AppState::new(None))
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            builder
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", path, Some(body)).await
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", path, None).await
}

async fn delete_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(app, "DELETE", path, None).await
}

/// Runs one session turn and returns the response body.
async fn turn(app: &Router, session_id: &str, text: &str) -> serde_json::Value {
    let (status, body) = post_json(
        app,
        &format!("/sessions/{}/turn", session_id),
        json!({ "text": text }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "turn '{}' failed: {}", text, body);
    body
}

fn speech(body: &serde_json::Value) -> Vec<String> {
    body["speech"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// /route
// ---------------------------------------------------------------------------

#[tokio::test]
async fn route_for_milk_and_bread() {
    let app = test_app();
    let (status, body) = post_json(&app, "/route", json!({ "items": ["milk", "bread"] })).await;
    assert_eq!(status, StatusCode::OK);

    let stops: Vec<&str> = body["stops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(stops.first(), Some(&"1.Entry"));
    assert!(stops.last().unwrap().starts_with("20"));
    assert_eq!(stops.iter().filter(|s| **s == "9.Dairy").count(), 1);
    assert_eq!(
        stops.iter().filter(|s| **s == "18.Pasta & Bakery").count(),
        1
    );

    let mapping = body["itemMapping"].as_array().unwrap();
    assert_eq!(mapping[0], json!({ "item": "milk", "zone": "9.Dairy" }));
    assert_eq!(
        mapping[1],
        json!({ "item": "bread", "zone": "18.Pasta & Bakery" })
    );

    // The polyline starts at the entry and carries coordinates.
    let route = body["route"].as_array().unwrap();
    assert!(route.len() > 2);
    assert_eq!(route[0]["zone"], "1.Entry");
    assert!(route[0]["x"].is_number());
    assert!(route[0]["y"].is_number());
}

#[tokio::test]
async fn route_with_empty_items_is_rejected() {
    let app = test_app();
    let (status, body) = post_json(&app, "/route", json!({ "items": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn route_for_unmatched_items_stays_at_the_entry() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/route",
        json!({ "items": ["xyzzy-nonexistent-item"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["stops"], json!(["1.Entry"]));
    assert_eq!(body["route"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["itemMapping"][0],
        json!({ "item": "xyzzy-nonexistent-item", "zone": "1.Entry" })
    );
}

// ---------------------------------------------------------------------------
// /assistant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn assistant_extracts_products_offline() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/assistant",
        json!({ "message": "i need milk and bread" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], json!(["milk", "bread"]));
    assert_eq!(body["intent"], "shopping");
    assert!(body["response"].as_str().unwrap().contains("milk"));
}

#[tokio::test]
async fn assistant_merges_with_current_products() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/assistant",
        json!({ "message": "also cheese", "currentProducts": ["milk"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], json!(["milk", "cheese"]));
}

// ---------------------------------------------------------------------------
// Session API
// ---------------------------------------------------------------------------

async fn create_session(app: &Router) -> String {
    let (status, body) = post_json(app, "/sessions", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    body["sessionId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn session_full_conversation() {
    let app = test_app();
    let id = create_session(&app).await;

    // Gather products; the offline extractor reads the catalog keywords.
    let body = turn(&app, &id, "I need milk and bread").await;
    assert_eq!(body["phase"], "confirming");
    assert_eq!(body["products"], json!(["milk", "bread"]));
    assert!(speech(&body)
        .iter()
        .any(|line| line.starts_with("I have 2 items: milk, bread.")));

    // Confirm: the server plans the route in the same turn.
    let body = turn(&app, &id, "yes").await;
    assert_eq!(body["phase"], "route_ready");
    assert_eq!(body["routeAvailable"], json!(true));
    let lines = speech(&body);
    assert_eq!(lines[0], "Calculating your route now.");
    assert!(lines[1].starts_with("Your route is ready. You will visit 2 zones."));

    // Walk the route.
    let body = turn(&app, &id, "start navigation").await;
    assert_eq!(body["phase"], "navigating");
    let lines = speech(&body);
    assert_eq!(lines[0], "Starting navigation.");
    assert!(lines[1].starts_with("From the entrance,"));

    let body = turn(&app, &id, "next zone").await;
    assert!(speech(&body)[0].contains("This is stop 2 of 2."));

    // Exhausted stops: the exit instruction repeats verbatim.
    let first_exit = speech(&turn(&app, &id, "next zone").await);
    assert!(first_exit[0].starts_with("You have reached all product locations."));
    let second_exit = speech(&turn(&app, &id, "next zone").await);
    assert_eq!(first_exit, second_exit);

    // Close out.
    let body = turn(&app, &id, "thank you").await;
    assert!(speech(&body)[0].starts_with("You are welcome!"));
    assert_eq!(body["phase"], "gathering");
    assert_eq!(body["products"], json!([]));
    assert_eq!(body["routeAvailable"], json!(false));
}

#[tokio::test]
async fn session_confirmation_amendments() {
    let app = test_app();
    let id = create_session(&app).await;

    turn(&app, &id, "I want milk and bread").await;

    // Remove one product; the confirmation prompt is re-spoken.
    let body = turn(&app, &id, "remove milk").await;
    assert_eq!(body["products"], json!(["bread"]));
    assert_eq!(body["phase"], "confirming");
    assert!(speech(&body)[0].starts_with("Removed milk."));

    // Add another; the addition cue extends the list.
    let body = turn(&app, &id, "also cheese").await;
    assert_eq!(body["products"], json!(["bread", "cheese"]));

    // Clearing resets to gathering.
    let body = turn(&app, &id, "no").await;
    assert_eq!(body["products"], json!([]));
    assert_eq!(body["phase"], "gathering");
}

#[tokio::test]
async fn session_camera_toggles() {
    let app = test_app();
    let id = create_session(&app).await;

    let body = turn(&app, &id, "camera on").await;
    assert_eq!(body["camera"], json!(true));
    assert_eq!(speech(&body)[0], "Opening front camera.");

    let body = turn(&app, &id, "camera off").await;
    assert_eq!(body["camera"], json!(false));
}

#[tokio::test]
async fn session_state_reports_the_route() {
    let app = test_app();
    let id = create_session(&app).await;

    turn(&app, &id, "I need coffee").await;
    turn(&app, &id, "yes").await;

    let (status, body) = get_json(&app, &format!("/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "route_ready");
    assert_eq!(body["routeAvailable"], json!(true));
    let stops = body["route"]["stops"].as_array().unwrap();
    assert_eq!(stops.first().unwrap(), "1.Entry");
    assert!(stops.iter().any(|s| s == "12.Water & Beer"));
}

#[tokio::test]
async fn session_delete_and_missing_ids() {
    let app = test_app();
    let id = create_session(&app).await;

    let (status, body) = delete_json(&app, &format!("/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = get_json(&app, &format!("/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = post_json(
        &app,
        &format!("/sessions/{}/turn", uuid::Uuid::new_v4()),
        json!({ "text": "hello" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
