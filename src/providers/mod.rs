//! Multi-provider AI support
//!
//! Every provider turns one system preamble plus one user prompt into a single
//! completion. Gemini is the default; OpenAI and OpenRouter are selected with a
//! `provider:model` identifier.

pub mod common;
pub mod gemini;
pub mod openai;
pub mod openrouter;

// Re-export common types
pub use common::{AiProvider, ModelIdentifier};

// Re-export providers
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use openrouter::OpenRouterProvider;

use rig::completion::PromptError;
use secrecy::SecretString;
use std::fmt;

use crate::error::Result;

/// Unified provider client, one variant per supported provider
pub enum ProviderClient {
    Gemini(GeminiProvider),
    OpenAi(OpenAiProvider),
    OpenRouter(OpenRouterProvider),
}

// OpenRouterProvider wraps a client without a Debug impl
impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderClient::Gemini(p) => f.debug_tuple("ProviderClient::Gemini").field(p).finish(),
            ProviderClient::OpenAi(p) => f.debug_tuple("ProviderClient::OpenAi").field(p).finish(),
            ProviderClient::OpenRouter(_) => f
                .debug_tuple("ProviderClient::OpenRouter")
                .field(&"<OpenRouter Client>")
                .finish(),
        }
    }
}

impl ProviderClient {
    /// Builds the client for `provider`.
    pub fn new(provider: AiProvider, api_key: &SecretString, base_url: Option<&str>) -> Result<Self> {
        Ok(match provider {
            AiProvider::Gemini => ProviderClient::Gemini(GeminiProvider::new(api_key, base_url)?),
            AiProvider::OpenAi => ProviderClient::OpenAi(OpenAiProvider::new(api_key, base_url)?),
            AiProvider::OpenRouter => {
                ProviderClient::OpenRouter(OpenRouterProvider::new(api_key, base_url)?)
            }
        })
    }

    pub fn provider(&self) -> AiProvider {
        match self {
            ProviderClient::Gemini(_) => AiProvider::Gemini,
            ProviderClient::OpenAi(_) => AiProvider::OpenAi,
            ProviderClient::OpenRouter(_) => AiProvider::OpenRouter,
        }
    }

    pub async fn prompt(
        &self,
        model: &str,
        preamble: &str,
        prompt: String,
        temperature: f64,
    ) -> std::result::Result<String, PromptError> {
        match self {
            ProviderClient::Gemini(p) => p.prompt(model, preamble, prompt, temperature).await,
            ProviderClient::OpenAi(p) => p.prompt(model, preamble, prompt, temperature).await,
            ProviderClient::OpenRouter(p) => p.prompt(model, preamble, prompt, temperature).await,
        }
    }
}
