use rig::completion::{CompletionError as RigCompletionError, PromptError};
use rig::http_client::Error as HttpError;
use std::time::Duration;
use thiserror::Error;

/// Failure of one completion call
#[derive(Debug, Error)]
pub enum CompletionError {
    /// A transient backend failure (network, rate limit, provider 5xx).
    #[error("backend request failed: {0}")]
    Backend(String),

    /// The provider refused the request outright (bad key, bad request).
    #[error("backend rejected request: {0}")]
    Rejected(String),

    /// One attempt did not finish within its timeout.
    #[error("backend call timed out after {0:?}")]
    Timeout(Duration),

    /// The retry budget was spent; `source` is the last failure.
    #[error("completion failed after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<CompletionError>,
    },
}

/// Phrases providers use for credential and permission failures.
const REJECTION_PHRASES: &[&str] = &[
    "api key not valid",
    "api_key_invalid",
    "invalid api key",
    "invalid_api_key",
    "incorrect api key",
    "permission denied",
    "permission_denied",
    "unauthenticated",
    "unauthorized",
];

/// Words that may directly precede an HTTP status in a provider message.
const STATUS_PREFIXES: &[&str] = &["status", "code", "httperror", "providererror"];

impl CompletionError {
    /// Whether another attempt may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, CompletionError::Backend(_) | CompletionError::Timeout(_))
    }

    /// Classifies a failed HTTP exchange by its status code.
    ///
    /// Bad request, bad credentials, forbidden and unknown model are
    /// permanent. Rate limits and server errors are worth retrying.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if is_permanent_status(status) || has_rejection_phrase(&message) {
            CompletionError::Rejected(message)
        } else {
            CompletionError::Backend(message)
        }
    }

    /// Classifies a provider error message that carries no structured status.
    ///
    /// A status is only read where the message labels it as one, so numbers
    /// inside quotas, durations or request ids never decide the outcome.
    pub fn from_provider_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let permanent = labelled_status(&message).is_some_and(is_permanent_status)
            || has_rejection_phrase(&message);

        if permanent {
            CompletionError::Rejected(message)
        } else {
            CompletionError::Backend(message)
        }
    }
}

fn is_permanent_status(status: u16) -> bool {
    matches!(status, 400 | 401 | 403 | 404)
}

fn has_rejection_phrase(message: &str) -> bool {
    let lower = message.to_lowercase();
    REJECTION_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// First `<prefix> <status>` pair in the message, e.g. `"code": 401`.
fn labelled_status(message: &str) -> Option<u16> {
    let lower = message.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    tokens.windows(2).find_map(|pair| {
        if !STATUS_PREFIXES.contains(&pair[0]) {
            return None;
        }
        pair[1]
            .parse::<u16>()
            .ok()
            .filter(|status| (100..=599).contains(status))
    })
}

impl From<PromptError> for CompletionError {
    fn from(error: PromptError) -> Self {
        match error {
            PromptError::CompletionError(RigCompletionError::HttpError(
                HttpError::InvalidStatusCode(status),
            )) => CompletionError::from_status(status.as_u16(), status.to_string()),
            PromptError::CompletionError(RigCompletionError::HttpError(
                HttpError::InvalidStatusCodeWithMessage(status, body),
            )) => CompletionError::from_status(status.as_u16(), format!("{}: {}", status, body)),
            // Connection failures and the like never reached the provider
            PromptError::CompletionError(RigCompletionError::HttpError(other)) => {
                CompletionError::Backend(other.to_string())
            }
            PromptError::CompletionError(RigCompletionError::UrlError(e)) => {
                CompletionError::Rejected(e.to_string())
            }
            PromptError::CompletionError(RigCompletionError::ProviderError(message)) => {
                CompletionError::from_provider_message(message)
            }
            other => CompletionError::from_provider_message(other.to_string()),
        }
    }
}
