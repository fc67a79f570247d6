//! Vocalis HTTP server — Axum router and handlers.
//!
//! The sampling endpoint lives at `GET /` and takes two optional query
//! parameters, `limit` and `excluded`. Validation failures come back as a
//! 400 whose body is the literal validation message; store failures come
//! back as a generic 500 with the detail logged server-side only.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::error::VocalisError;
use crate::query::build_query;
use crate::store::TranscriptStore;
use crate::validate::validate;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (`0` for auto-assign).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Row store the sampling endpoint reads from.
    pub store: Arc<dyn TranscriptStore>,
}

/// Raw query parameters of the sampling endpoint.
///
/// Both values stay unparsed strings here; the validation pipeline owns
/// their interpretation.
#[derive(Debug, Deserialize)]
pub struct SampleParams {
    limit: Option<String>,
    excluded: Option<String>,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sample_handler))
        .route("/health", get(health_handler))
        .route("/favicon.ico", get(favicon_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server. Returns a handle holding the bound port.
pub async fn start(
    config: ServerConfig,
    store: Arc<dyn TranscriptStore>,
) -> Result<ServerHandle, std::io::Error> {
    let router = build_router(AppState { store });
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(host = %config.host, port = local_addr.port(), "vocalis server started");

    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle { port: local_addr.port(), server })
}

/// Handle returned by `start()` — keeps the serve task alive.
pub struct ServerHandle {
    /// Port the listener actually bound.
    pub port: u16,
    server: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Wait for the serve task to finish (it runs until the process exits).
    pub async fn wait(self) {
        self.server.await.ok();
    }
}

/// GET / — validate, build the bound query, sample, respond.
async fn sample_handler(
    State(state): State<AppState>,
    Query(params): Query<SampleParams>,
) -> Response {
    let (limit, excluded) = match validate(params.limit.as_deref(), params.excluded.as_deref()) {
        Ok(validated) => validated,
        Err(err) => return error_response(&err),
    };

    let query = build_query(limit, &excluded);
    match state.store.sample(&query) {
        Ok(records) => Json(records).into_response(),
        Err(err) => error_response(&err),
    }
}

/// GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /favicon.ico — short-circuit browser probes before they reach the
/// sampler.
async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Map a core error onto the HTTP contract.
///
/// Client-input errors carry their literal message as the 400 body. Store
/// errors are logged here, with only a generic body leaving the process.
fn error_response(err: &VocalisError) -> Response {
    if err.is_client_error() {
        (StatusCode::BAD_REQUEST, err.to_string()).into_response()
    } else {
        tracing::error!(code = err.error_code(), error = %err, "sampling query failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
