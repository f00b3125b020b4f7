//! Liveness handlers
//!
//! Both endpoints answer from static data and never touch the completion
//! backend, so they stay green while the model provider is down.

use axum::Json;
use serde::Serialize;

/// Name reported by the liveness endpoints
pub const SERVICE_NAME: &str = "MoodBot Backend";

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "healthy")
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Public health check handler
///
/// # Example
/// ```bash
/// curl http://localhost:8000/health
/// # Returns: {"status":"healthy","service":"MoodBot Backend"}
/// ```
pub async fn health_check() -> Json<HealthCheckResponse> {
    tracing::debug!("Health check requested - system operational");
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Root liveness handler
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} is running!", SERVICE_NAME),
    })
}
