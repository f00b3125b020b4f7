//! OpenAI provider implementation

use rig::client::CompletionClient;
use rig::completion::{Prompt, PromptError};
use rig::providers::openai::Client;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::error::{Error, Result};

/// OpenAI provider
pub struct OpenAiProvider {
    client: Client,
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("client", &"<OpenAI Client>")
            .finish()
    }
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: &SecretString, base_url: Option<&str>) -> Result<Self> {
        let client = if let Some(url) = base_url {
            tracing::info!(
                base_url = %url,
                "Creating OpenAI provider with custom base URL"
            );
            Client::builder()
                .api_key(api_key.expose_secret())
                .base_url(url)
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to create OpenAI client: {}", e)))?
        } else {
            tracing::info!("Creating OpenAI provider with default base URL");
            Client::new(api_key.expose_secret())
                .map_err(|e| Error::Configuration(format!("Failed to create OpenAI client: {}", e)))?
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
