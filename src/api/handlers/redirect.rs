//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /api/url/{alias}`
///
/// The lookup goes through [`UrlStorage::get_url`](crate::application::services::UrlStorage::get_url),
/// so a cache hit never touches the database.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state
        .storage
        .get_url(&alias)
        .await
        .map_err(|e| AppError::from_storage(e, &alias))?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|_| {
        tracing::error!(alias = %alias, "Stored URL is not a valid header value");
        AppError::internal("Internal server error", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
