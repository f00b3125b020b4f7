use async_trait::async_trait;
use moodbot::models::chat::CompletionRequest;
use moodbot::{CompletionBackend, CompletionError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// What the fake answers for one attempt
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    Transient(String),
    Rejected(String),
    /// Sleeps far longer than any test timeout
    Hang,
}

/// Scripted completion backend that records every request it receives
///
/// Replies are consumed in order; once the script runs out the fallback reply
/// is used for every further call.
pub struct FakeBackend {
    script: Mutex<VecDeque<FakeReply>>,
    fallback: FakeReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    pub fn replying(text: &str) -> Self {
        Self::scripted(Vec::new(), FakeReply::Text(text.to_string()))
    }

    pub fn failing() -> Self {
        Self::scripted(Vec::new(), FakeReply::Transient("503 Service Unavailable".to_string()))
    }

    pub fn scripted(script: Vec<FakeReply>, fallback: FakeReply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self) -> FakeReply {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match self.next_reply() {
            FakeReply::Text(text) => Ok(text),
            FakeReply::Transient(message) => Err(CompletionError::Backend(message)),
            FakeReply::Rejected(message) => Err(CompletionError::Rejected(message)),
            FakeReply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("too late".to_string())
            }
        }
    }

    fn describe(&self) -> String {
        "fake:backend".to_string()
    }
}
