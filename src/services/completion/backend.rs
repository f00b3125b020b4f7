use async_trait::async_trait;

use super::CompletionError;
use crate::models::chat::CompletionRequest;

/// A remote chat-completion model.
///
/// One call is one attempt; retries and timeouts belong to the caller.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Short label for logs, e.g. `gemini:gemini-1.5-flash`.
    fn describe(&self) -> String {
        "completion-backend".to_string()
    }
}
