//! DTOs for health check endpoint.

use serde::Serialize;

use crate::application::services::ComponentStatus;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each storage component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ComponentStatus> for CheckStatus {
    fn from(status: &ComponentStatus) -> Self {
        match status {
            ComponentStatus::Ok => Self {
                status: "ok".to_string(),
                message: None,
            },
            ComponentStatus::Disabled => Self {
                status: "disabled".to_string(),
                message: Some("Cache not configured".to_string()),
            },
            ComponentStatus::Error(message) => Self {
                status: "error".to_string(),
                message: Some(message.clone()),
            },
        }
    }
}
