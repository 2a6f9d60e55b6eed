// src/core/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of conversational intents the classifier can assign.
/// `Default` is the fallthrough when no keyword rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Help,
    Translation,
    Phrase,
    Quiz,
    Grammar,
    Cultural,
    Default,
}

impl Intent {
    /// The reply kind is a function of the intent, never set independently.
    pub fn reply_kind(self) -> ReplyKind {
        match self {
            Intent::Translation => ReplyKind::Translation,
            Intent::Phrase | Intent::Grammar => ReplyKind::Lesson,
            _ => ReplyKind::Text,
        }
    }
}

/// How the UI should render a bot reply.
/// `Correction` is reserved for a grading feature that is not wired in yet;
/// the responder never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Text,
    Translation,
    Lesson,
    Correction,
}

/// A generated bot reply before it is wrapped into a [`ChatMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

/// The message record handed back to the chat UI. `id` and `timestamp` are
/// the only environment-dependent fields; everything else is deterministic
/// given the session's random source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub kind: ReplyKind,
}
