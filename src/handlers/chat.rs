//! Chat completion endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::{Error, FieldError, Result},
    models::requests::{ChatRequest, ChatResponse},
    state::AppState,
    validation::validate_chat_request,
};

/// Message returned to callers when the model backend fails.
pub const BACKEND_FAILURE_MESSAGE: &str =
    "The AI backend is currently unavailable. Please try again in a moment.";

/// Answers one message in the requested mood
///
/// Empty messages and unknown moods are rejected with 400 before the
/// completion service is called. Backend failures are logged in full and
/// reported to the caller as 503 with a generic message.
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "[ChatHandler] Malformed chat request");
        Error::Validation(FieldError::new("body", rejection.body_text()))
    })?;

    tracing::info!(
        mood = %req.mood,
        message_chars = req.message.chars().count(),
        conversation_id = req.conversation_id.as_deref().unwrap_or("-"),
        "[ChatHandler] Received chat request"
    );

    let mood = validate_chat_request(&state.moods, &req).inspect_err(|e| {
        tracing::warn!(error = %e, "[ChatHandler] Rejected chat request");
    })?;

    let content = state
        .completion
        .complete(mood.as_ref(), &req.message)
        .await
        .map_err(|e| {
            tracing::error!(mood = %mood, error = %e, "[ChatHandler] Completion failed");
            Error::BackendUnavailable(BACKEND_FAILURE_MESSAGE.to_string())
        })?;

    tracing::info!(
        mood = %mood,
        content_chars = content.chars().count(),
        "[ChatHandler] Returning response"
    );

    Ok(Json(ChatResponse::success(content)))
}
