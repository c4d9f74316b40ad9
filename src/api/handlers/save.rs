//! Handler for the save endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /api/url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "docs" }
/// ```
///
/// Omit `alias` (or send an empty string) to have one generated.
///
/// # Response
///
/// ```json
/// { "url": "https://example.com", "alias": "docs" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if validation fails
/// - `409 Conflict` if the alias is taken
/// - `503 Service Unavailable` if every generated alias collided
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    payload.validate()?;

    let requested = payload.alias.as_deref().unwrap_or_default();

    let alias = state
        .shorten_service
        .shorten(&payload.url, Some(requested))
        .await
        .map_err(|e| AppError::from_storage(e, requested))?;

    Ok(Json(SaveResponse {
        url: payload.url,
        alias,
    }))
}
