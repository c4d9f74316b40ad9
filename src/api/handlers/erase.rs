//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::erase::EraseResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias and returns the mapping that was removed.
///
/// # Endpoint
///
/// `DELETE /api/url/{alias}`
///
/// The database row is removed first; cache entries are dropped afterwards on
/// a best-effort basis.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn erase_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EraseResponse>, AppError> {
    let url = state
        .storage
        .delete_url(&alias)
        .await
        .map_err(|e| AppError::from_storage(e, &alias))?;

    tracing::info!(alias = %alias, "URL deleted");

    Ok(Json(EraseResponse { alias, url }))
}
