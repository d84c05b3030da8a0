//! Binary entrypoint for the shopping guide HTTP server.
//!
//! Reads configuration from environment variables:
//! - `STOREGUIDE_PORT`: listen port (default: "3000")
//! - `STOREGUIDE_API_KEY`: provider API key; unset runs offline
//! - `STOREGUIDE_API_BASE_URL`: provider base URL (default: OpenAI)
//! - `STOREGUIDE_MODEL`: chat model (default: "gpt-4o-mini")

use storeguide_server::llm::LlmConfig;
use storeguide_server::router::build_router;
use storeguide_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("STOREGUIDE_PORT").unwrap_or_else(|_| "3000".to_string());

    let llm = LlmConfig::from_env();
    match &llm {
        Some(config) => tracing::info!("LLM collaborators enabled (model: {})", config.model),
        None => tracing::info!(
            "no STOREGUIDE_API_KEY set; running with offline extraction and \
             deterministic sequencing"
        ),
    }

    let state = AppState::new(llm);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("storeguide server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
