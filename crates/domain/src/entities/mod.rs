//! Domain entities

mod cloned_voice;
mod conversation;

pub use cloned_voice::{CloneStatus, ClonedVoice};
pub use conversation::{CONTEXT_WINDOW_TURNS, Conversation, ConversationTurn};
