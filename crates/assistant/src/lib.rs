//! `greenscape-assistant`
//!
//! Scripted customer-facing chatbot. Classification is deterministic: the
//! same message always yields the same reply, and nothing here touches
//! stored records.

pub mod classifier;
pub mod corpus;
pub mod reply;

pub use classifier::{Assistant, ChatMessage};
pub use corpus::{CORPUS, Intent};
pub use reply::{AssistantError, FALLBACK_REPLY, Reply, UNCLEAR_REPLY};
