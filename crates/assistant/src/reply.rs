use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when the last message has no usable text.
pub const UNCLEAR_REPLY: &str = "I didn't understand that. Can you rephrase?";

/// Returned when no intent scores above the match threshold.
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that. Can you rephrase?";

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Matched intent; `None` for the fallback.
    pub intent: Option<String>,
    /// Best similarity seen, in \[0, 1\].
    pub score: f64,
    pub text: String,
}

impl Reply {
    pub(crate) fn matched(intent: &str, score: f64, text: &str) -> Self {
        Self {
            intent: Some(intent.to_string()),
            score,
            text: text.to_string(),
        }
    }

    pub(crate) fn fallback(score: f64) -> Self {
        Self {
            intent: None,
            score,
            text: FALLBACK_REPLY.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.intent.is_none()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    /// No messages, or the last one is blank after normalization.
    #[error("I didn't understand that. Can you rephrase?")]
    EmptyMessage,
}
