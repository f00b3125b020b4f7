//! Mood-aware single-turn chat completion.
//!
//! [`CompletionService`] resolves the persona for a mood, composes the
//! `[system, user]` message pair and sends it to a [`CompletionBackend`].
//! Each attempt runs under a timeout; transient failures are retried with a
//! doubling delay until the attempt budget is spent.
//!
//! ```text
//! received -> persona resolved -> model invoked -> completed | failed
//! ```
//!
//! Nothing is kept between calls: no history, no cache, no session.

pub mod backend;
pub mod error;
pub mod rig_engine;

pub use backend::CompletionBackend;
pub use error::CompletionError;
pub use rig_engine::RigService;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AiConfig;
use crate::models::chat::{ChatTurn, CompletionRequest};
use crate::moods::MoodRegistry;

/// Fixed generation and retry parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f64,
    /// Total attempts, the first one included.
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    pub retry_delay: Duration,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::from(&AiConfig::default())
    }
}

impl From<&AiConfig> for CompletionSettings {
    fn from(config: &AiConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_attempts: config.max_attempts.max(1),
            attempt_timeout: config.request_timeout(),
            retry_delay: config.retry_delay(),
        }
    }
}

/// Completion dispatcher shared by all request handlers
#[derive(Clone)]
pub struct CompletionService {
    backend: Arc<dyn CompletionBackend>,
    moods: Arc<MoodRegistry>,
    settings: CompletionSettings,
}

impl std::fmt::Debug for CompletionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionService")
            .field("backend", &self.backend.describe())
            .field("settings", &self.settings)
            .finish()
    }
}

impl CompletionService {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        moods: Arc<MoodRegistry>,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            backend,
            moods,
            settings,
        }
    }

    pub fn moods(&self) -> &MoodRegistry {
        &self.moods
    }

    /// Shared handle to the registry this service resolves personas from.
    pub fn registry(&self) -> Arc<MoodRegistry> {
        Arc::clone(&self.moods)
    }

    /// Builds the request sent to the backend: persona first, user text second.
    ///
    /// Unknown moods use the default persona. The user text is passed through
    /// untouched, even when empty.
    pub fn compose(&self, mood: &str, user_text: &str) -> CompletionRequest {
        let persona = self.moods.lookup(mood);

        CompletionRequest {
            messages: vec![ChatTurn::system(persona), ChatTurn::user(user_text)],
            temperature: self.settings.temperature,
        }
    }

    /// Runs one completion for `user_text` in the given mood.
    #[tracing::instrument(skip(self, user_text), fields(backend = %self.backend.describe(), chars = user_text.len()))]
    pub async fn complete(&self, mood: &str, user_text: &str) -> Result<String, CompletionError> {
        let request = self.compose(mood, user_text);
        let mut delay = self.settings.retry_delay;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let outcome = match tokio::time::timeout(
                self.settings.attempt_timeout,
                self.backend.complete(&request),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(CompletionError::Timeout(self.settings.attempt_timeout)),
            };

            match outcome {
                Ok(text) => {
                    tracing::debug!(attempt, response_chars = text.len(), "Completion succeeded");
                    return Ok(text);
                }
                Err(e) if !e.is_transient() => {
                    tracing::error!(attempt, error = %e, "Completion rejected by backend");
                    return Err(e);
                }
                Err(e) if attempt >= self.settings.max_attempts => {
                    tracing::error!(attempt, error = %e, "Completion retry budget exhausted");
                    return Err(CompletionError::Exhausted {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.settings.max_attempts,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %e,
                        "Completion attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
            }
        }
    }
}
