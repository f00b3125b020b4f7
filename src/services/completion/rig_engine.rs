use async_trait::async_trait;

use super::{CompletionBackend, CompletionError};
use crate::config::AiConfig;
use crate::error::{Error, Result};
use crate::models::chat::CompletionRequest;
use crate::providers::{AiProvider, ModelIdentifier, ProviderClient};

/// Completion backend on top of the rig provider clients.
///
/// The client is created once and shared by every request.
#[derive(Debug)]
pub struct RigService {
    client: ProviderClient,
    model: ModelIdentifier,
}

impl RigService {
    /// Builds the service from validated AI configuration.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let model = config.model_identifier()?;
        let api_key = config.api_key.as_ref().ok_or_else(|| {
            Error::Configuration(format!("no API key configured for provider {}", model.provider))
        })?;

        let client = ProviderClient::new(model.provider, api_key, config.base_url.as_deref())?;

        tracing::info!(
            provider = %model.provider,
            model = %model.model,
            "Completion backend ready"
        );

        Ok(Self { client, model })
    }

    pub fn provider(&self) -> AiProvider {
        self.client.provider()
    }

    pub fn model(&self) -> &ModelIdentifier {
        &self.model
    }
}

#[async_trait]
impl CompletionBackend for RigService {
    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, CompletionError> {
        // System turns become the preamble, which rig sends as the system instruction
        let preamble = request.system_prompt();
        let prompt = request.user_prompt();

        let text = self
            .client
            .prompt(&self.model.model, &preamble, prompt, request.temperature)
            .await?;

        Ok(text)
    }

    fn describe(&self) -> String {
        self.model.to_string()
    }
}
