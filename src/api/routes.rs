//! API route configuration.
//!
//! Write endpoints require Basic authentication via
//! [`crate::api::middleware::auth`]; lookups are public.

use crate::api::handlers::{erase_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET    /url/{alias}`  - Redirect to the stored URL
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/url/{alias}", get(redirect_handler))
}

/// API routes that modify data.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under a given or generated alias
/// - `DELETE /url/{alias}`  - Remove an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(erase_handler))
}
