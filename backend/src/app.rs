//! Router assembly
//!
//! Builds the full axum application: activity routes, health check, the
//! static frontend and the tracing/CORS layers.

use crate::api;
use crate::state::SharedRegistry;
use axum::{
    extract::Request,
    middleware::Next,
    response::{Redirect, Response},
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::time::Instant;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

/// Build the application router around an injected registry
pub fn build_router(registry: SharedRegistry, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/api/health", get(api::health::health_check))
        .route("/activities", get(api::activities::list_activities))
        .route(
            "/activities/:activity/signup",
            post(api::activities::signup),
        )
        .route(
            "/activities/:activity/participants/:email",
            delete(api::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(registry)
}
