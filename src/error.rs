use thiserror::Error;
use serde::{Serialize, Deserialize};

// Import Axum types for HTTP response conversion
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// A validation failure on one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error on a single request field.
    #[error("Validation error: {0}")]
    Validation(FieldError),

    /// The completion backend could not produce an answer.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert custom Error to HTTP response
///
/// Every variant renders the same envelope the chat endpoint uses on success,
/// with `content` set to null and a message in `error`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = match &self {
            Error::Validation(FieldError { field, message }) => {
                serde_json::json!({
                    "content": null,
                    "error": message,
                    "code": "VALIDATION_ERROR",
                    "fields": { field: message }
                })
            }
            Error::BackendUnavailable(msg) => {
                serde_json::json!({
                    "content": null,
                    "error": msg,
                    "code": "BACKEND_UNAVAILABLE"
                })
            }
            Error::Configuration(_) | Error::Config(_) => {
                serde_json::json!({
                    "content": null,
                    "error": "Configuration error",
                    "code": "CONFIG_ERROR"
                })
            }
            Error::Internal(msg) => {
                serde_json::json!({
                    "content": null,
                    "error": msg,
                    "code": "INTERNAL_ERROR"
                })
            }
        };

        let status = match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(body)).into_response()
    }
}
