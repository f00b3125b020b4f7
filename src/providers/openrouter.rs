//! OpenRouter provider implementation (OpenAI-compatible)

use rig::client::CompletionClient;
use rig::completion::{Prompt, PromptError};
use rig::providers::openrouter::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// OpenRouter provider (OpenAI-compatible)
///
/// OpenRouter provides access to multiple models through a unified API.
pub struct OpenRouterProvider {
    client: Client,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider
    pub fn new(api_key: &SecretString, base_url: Option<&str>) -> Result<Self> {
        let client = if let Some(url) = base_url {
            tracing::info!(
                base_url = %url,
                "Creating OpenRouter provider with custom base URL"
            );
            Client::builder()
                .api_key(api_key.expose_secret())
                .base_url(url)
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to create OpenRouter client: {}", e)))?
        } else {
            tracing::info!("Creating OpenRouter provider with default base URL");
            Client::new(api_key.expose_secret())
                .map_err(|e| Error::Configuration(format!("Failed to create OpenRouter client: {}", e)))?
        };

        Ok(Self { client })
    }

    /// Runs one prompt against `model` with `preamble` as the system instruction.
    pub async fn prompt(
        &self,
        model: &str,
        preamble: &str,
        prompt: String,
        temperature: f64,
    ) -> std::result::Result<String, PromptError> {
        let agent = self
            .client
            .agent(model)
            .preamble(preamble)
            .temperature(temperature)
            .build();

        agent.prompt(prompt).await
    }
}
