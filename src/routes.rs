//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`            - Health check: database and cache (public)
//! - `GET    /api/url/{alias}`   - Redirect (public)
//! - `POST   /api/url`           - Save (Basic auth)
//! - `DELETE /api/url/{alias}`   - Delete (Basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Slow requests are dropped with `408 Request Timeout`
//! - **Authentication** - Basic auth on write routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// Dropping the handler future on timeout cancels any in-flight store or
/// cache call.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes().merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
        .layer(tracing::propagate_request_id())
        .layer(tracing::set_request_id())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
