//! Google Gemini provider, the default backend for mood chats

use rig::client::CompletionClient;
use rig::completion::{Prompt, PromptError};
use rig::providers::gemini::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::fmt;

use crate::error::{Error, Result};

/// Gemini provider backed by the rig Gemini client
pub struct GeminiProvider {
    client: Client,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("client", &"<Gemini Client>")
            .finish()
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: &SecretString, base_url: Option<&str>) -> Result<Self> {
        let client = if let Some(url) = base_url {
            tracing::info!(
                base_url = %url,
                "Creating Gemini provider with custom base URL"
            );
            Client::builder()
                .api_key(api_key.expose_secret())
                .base_url(url)
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to create Gemini client: {}", e)))?
        } else {
            tracing::info!("Creating Gemini provider with default base URL");
            Client::new(api_key.expose_secret())
                .map_err(|e| Error::Configuration(format!("Failed to create Gemini client: {}", e)))?
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
        // rig only forwards the temperature when a generation config is present
        let agent = self
            .client
            .agent(model)
            .preamble(preamble)
            .temperature(temperature)
            .additional_params(json!({ "generationConfig": { "temperature": temperature } }))
            .build();

        agent.prompt(prompt).await
    }
}
