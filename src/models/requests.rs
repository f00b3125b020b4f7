use serde::{Deserialize, Serialize};

use crate::moods::MoodInfo;

/// HTTP API request for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub mood: String,
    /// Accepted for client compatibility; no conversation state is kept.
    #[serde(default, alias = "conversationId")]
    pub conversation_id: Option<String>,
}

/// Successful `POST /chat` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(content: String) -> Self {
        Self {
            content,
            error: None,
        }
    }
}

/// `GET /moods` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodsResponse {
    pub moods: Vec<MoodInfo>,
}
