use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::providers::{AiProvider, ModelIdentifier};

/// Environment variable read when `MOODBOT__AI__API_KEY` is not set.
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. `*` allows any origin.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Provider credential. Required before the server starts.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    /// Model identifier, either `provider:model` or a bare model name for the default provider.
    pub model: String,
    /// Optional override for the provider endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
    pub temperature: f64,
    /// Total attempts per completion, including the first one.
    pub max_attempts: u32,
    pub request_timeout_seconds: u64,
    /// Delay before the first retry; doubles on every further retry.
    pub retry_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `MOODBOT__` prefix and `__` separator
            // e.g., MOODBOT__AI__MODEL="gemini:gemini-1.5-flash"
            .add_source(
                config::Environment::with_prefix("MOODBOT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = std::env::var(GOOGLE_API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);
        }

        Ok(config)
    }

    /// Checks everything the server needs before it may accept requests.
    pub fn validate(&self) -> Result<()> {
        self.ai.validate()?;

        if self.server.host.trim().is_empty() {
            return Err(Error::Configuration("server.host must not be empty".to_string()));
        }

        Ok(())
    }
}

impl ServerConfig {
    /// Address string passed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AiConfig {
    pub fn validate(&self) -> Result<()> {
        match &self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => {}
            _ => {
                return Err(Error::Configuration(format!(
                    "missing model provider API key: set MOODBOT__AI__API_KEY or {}",
                    GOOGLE_API_KEY_ENV
                )));
            }
        }

        self.model_identifier()?;

        if self.max_attempts == 0 {
            return Err(Error::Configuration("ai.max_attempts must be at least 1".to_string()));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Configuration(format!(
                "ai.temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(Error::Configuration(
                "ai.request_timeout_seconds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses `model` into provider and model name.
    pub fn model_identifier(&self) -> Result<ModelIdentifier> {
        if self.model.trim().is_empty() {
            return Err(Error::Configuration("ai.model must not be empty".to_string()));
        }

        ModelIdentifier::parse(self.model.trim(), AiProvider::Gemini).map_err(Error::Configuration)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini:gemini-1.5-flash".to_string(),
            base_url: None,
            temperature: 0.4,
            max_attempts: 2,
            request_timeout_seconds: 30,
            retry_delay_ms: 500,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // api_key is skipped by serde, so it never reaches the log
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
