pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod moods;
pub mod providers;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use moods::{Mood, MoodInfo, MoodRegistry};
pub use routes::create_router;
pub use services::completion::{CompletionBackend, CompletionError, CompletionService, CompletionSettings, RigService};
pub use state::AppState;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Config::load()
}
