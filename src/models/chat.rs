use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// One message of the outbound sequence. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Everything a completion backend receives for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatTurn>,
    pub temperature: f64,
}

impl CompletionRequest {
    /// System turns joined in order, used as the model preamble.
    pub fn system_prompt(&self) -> String {
        self.contents(ChatRole::System).join("\n\n")
    }

    /// User turns joined in order.
    pub fn user_prompt(&self) -> String {
        self.contents(ChatRole::User).join("\n\n")
    }

    fn contents(&self, role: ChatRole) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|turn| turn.role == role)
            .map(|turn| turn.content.as_str())
            .collect()
    }
}
