// Web server — Axum-based upload endpoint for compliance checks.
//
// A browser front end posts both documents to `/` as multipart form data and
// gets the text report back as JSON. CORS is limited to the one configured
// origin, with credentials allowed. The CORS layer answers every OPTIONS
// request itself; an outer middleware gives those answers a status body.
// Uploads are capped by the configured body limit rather than axum's 2 MB
// default.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

pub mod handlers;
pub mod uploads;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.listen_addr();
    let app = build_router(AppState::new(config));

    info!("rfpcheck listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", post(handlers::check::check_documents))
        .route("/health", get(health))
        .layer(body_limit)
        .layer(cors)
        .layer(middleware::from_fn(options_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for a single origin. An unparseable origin allows none.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            warn!(origin, error = %e, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}

/// Replace the empty body of a successful OPTIONS answer with
/// `{"status": "ok"}`, keeping the CORS headers.
async fn options_status(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;
    if !is_options || !response.status().is_success() {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    let body = serde_json::json!({ "status": "ok" }).to_string();
    Response::from_parts(parts, Body::from(body))
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
