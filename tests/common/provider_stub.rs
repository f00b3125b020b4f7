use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One request received by the stub
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Local stand-in for a model provider's HTTP API
///
/// Answers every request with the same status and body and records what it
/// received, so tests can point a real rig client at it through `base_url`.
pub struct ProviderStub {
    /// Base URL to configure as the provider endpoint
    pub address: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ProviderStub {
    /// Stub answering like a successful Gemini `generateContent` call
    pub async fn gemini_reply(text: &str) -> Self {
        Self::start(
            StatusCode::OK,
            json!({
                "responseId": "stub-response",
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": text }] },
                    "finishReason": "STOP"
                }]
            }),
        )
        .await
    }

    /// Stub answering every call with a Gemini-style error body
    pub async fn gemini_error(status: StatusCode, error_status: &str, message: &str) -> Self {
        Self::start(
            status,
            json!({
                "error": {
                    "code": status.as_u16(),
                    "message": message,
                    "status": error_status
                }
            }),
        )
        .await
    }

    pub async fn start(status: StatusCode, body: Value) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body: body.to_string(),
            calls: calls.clone(),
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address: format!("http://127.0.0.1:{port}"),
            calls,
        }
    }

    /// Requests received so far, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(State(stub): State<StubState>, uri: Uri, body: Bytes) -> (StatusCode, String) {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    stub.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });

    (stub.status, stub.body.clone())
}
