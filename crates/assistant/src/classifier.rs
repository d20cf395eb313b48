use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::corpus::{CORPUS, Intent};
use crate::reply::{AssistantError, Reply};

/// One turn of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Token-overlap intent matcher.
///
/// Model:
/// - Lowercase the text and drop everything except letters, digits and spaces.
/// - Score each utterance with the Dice coefficient over word sets.
/// - An intent scores its best utterance; the best intent wins if it reaches
///   `threshold`.
#[derive(Debug, Clone)]
pub struct Assistant {
    corpus: &'static [Intent],
    threshold: f64,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(CORPUS)
    }
}

impl Assistant {
    pub fn new(corpus: &'static [Intent]) -> Self {
        Self {
            corpus,
            threshold: 0.5,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Answer the last message of a transcript; earlier turns are ignored.
    pub fn respond(&self, messages: &[ChatMessage]) -> Result<Reply, AssistantError> {
        let last = messages.last().ok_or(AssistantError::EmptyMessage)?;
        self.classify(&last.content)
    }

    pub fn classify(&self, message: &str) -> Result<Reply, AssistantError> {
        let words = tokens(message);
        if words.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let mut best: Option<(&Intent, f64)> = None;
        for intent in self.corpus {
            let score = intent
                .utterances
                .iter()
                .map(|u| dice(&words, &tokens(u)))
                .fold(0.0, f64::max);
            // Strictly greater: earlier intents win ties.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((intent, score));
            }
        }

        Ok(match best {
            Some((intent, score)) if score >= self.threshold => {
                Reply::matched(intent.name, score, intent.answer)
            }
            Some((_, score)) => Reply::fallback(score),
            None => Reply::fallback(0.0),
        })
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                Some(c.to_lowercase().collect::<String>())
            } else {
                None
            }
        })
        .collect()
}

fn tokens(text: &str) -> BTreeSet<String> {
    normalize(text).split_whitespace().map(str::to_string).collect()
}

fn dice(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    (2 * shared) as f64 / (a.len() + b.len()) as f64
}
