//! Input validation for the HTTP boundary.
//!
//! Requests that fail here never reach the completion service.

use crate::error::{Error, FieldError, Result};
use crate::models::requests::ChatRequest;
use crate::moods::{Mood, MoodRegistry};

/// Validates that a chat message has content after trimming whitespace
///
/// # Examples
/// ```
/// use moodbot::validation::validate_message;
///
/// validate_message("Hello").unwrap();
/// assert!(validate_message("   \n").is_err());
/// ```
pub fn validate_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::Validation(FieldError::new(
            "message",
            "Message cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that `mood` is one of the registered mood ids, exactly.
pub fn validate_mood(registry: &MoodRegistry, mood: &str) -> Result<Mood> {
    registry.resolve(mood).ok_or_else(|| {
        Error::Validation(FieldError::new("mood", "Invalid mood specified"))
    })
}

/// Validates a `POST /chat` body, message first.
pub fn validate_chat_request(registry: &MoodRegistry, request: &ChatRequest) -> Result<Mood> {
    validate_message(&request.message)?;
    validate_mood(registry, &request.mood)
}
