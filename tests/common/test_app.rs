use moodbot::config::ServerConfig;
use moodbot::{create_router, AppState, CompletionService, CompletionSettings, MoodRegistry};
use reqwest::{Client, redirect::Policy};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::FakeBackend;

/// HTTP test application wrapper
///
/// Serves the real router on a random port, backed by a [`FakeBackend`], so
/// every test gets its own server and tests can run in parallel.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// The backend behind the completion service
    pub backend: Arc<FakeBackend>,
}

impl TestApp {
    /// Test app whose backend always answers with a fixed text
    pub async fn new() -> Self {
        Self::with_backend(FakeBackend::replying("Hello from the fake backend")).await
    }

    /// Test app around a specific fake backend
    ///
    /// Retries wait 10ms and attempts time out after 2s to keep tests fast.
    pub async fn with_backend(backend: FakeBackend) -> Self {
        let backend = Arc::new(backend);
        let settings = CompletionSettings {
            temperature: 0.4,
            max_attempts: 2,
            attempt_timeout: Duration::from_secs(2),
            retry_delay: Duration::from_millis(10),
        };
        let completion = Arc::new(CompletionService::new(
            backend.clone(),
            Arc::new(MoodRegistry::new()),
            settings,
        ));

        let app = create_router(AppState::new(completion), &ServerConfig::default());

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        // Start server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            backend,
        }
    }

    /// Get the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// POSTs a chat message
    pub async fn post_chat(&self, message: &str, mood: &str) -> reqwest::Response {
        self.client
            .post(self.url("/chat"))
            .json(&serde_json::json!({
                "message": message,
                "mood": mood,
            }))
            .send()
            .await
            .unwrap()
    }
}
