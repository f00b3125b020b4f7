use crate::{moods::MoodRegistry, services::completion::CompletionService};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
///
/// Everything in here is created once at start-up and only read afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Mood registry used for validation and the mood listing
    pub moods: Arc<MoodRegistry>,
    /// Completion dispatcher
    pub completion: Arc<CompletionService>,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// The registry is taken from the completion service so both always agree.
    pub fn new(completion: Arc<CompletionService>) -> Self {
        Self {
            moods: completion.registry(),
            completion,
        }
    }
}
