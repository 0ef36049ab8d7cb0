//! Conversation entity - An ordered, append-only sequence of exchanges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ConversationId;

/// Number of most recent turns included when building model context.
///
/// Older turns stay in the conversation but are not sent to the model.
pub const CONTEXT_WINDOW_TURNS: usize = 5;

/// A single completed exchange: what the user said and what the model replied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// The user's side of the exchange
    pub human: String,
    /// The model's reply
    pub ai: String,
    /// When the exchange completed
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// Create a new turn
    pub fn new(human: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            ai: ai.into(),
            created_at: Utc::now(),
        }
    }
}

/// A conversation containing an ordered sequence of turns.
///
/// Turns are append-only; the only removal path is [`Conversation::clear`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier
    pub id: ConversationId,
    /// Completed turns (oldest first)
    pub turns: Vec<ConversationTurn>,
    /// When the conversation started
    pub created_at: DateTime<Utc>,
    /// When the conversation was last updated
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new empty conversation
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: ConversationId::new(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a conversation with a specific ID
    pub fn with_id(id: ConversationId) -> Self {
        let mut conv = Self::new();
        conv.id = id;
        conv
    }

    /// Append a completed turn
    pub fn add_turn(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
        self.updated_at = Utc::now();
    }

    /// The most recent turns used for model context, oldest first
    pub fn context_window(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(CONTEXT_WINDOW_TURNS);
        &self.turns[start..]
    }

    /// Get the number of turns
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Check if the conversation is empty
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Remove all turns (the explicit clear-all action)
    pub fn clear(&mut self) {
        self.turns.clear();
        self.updated_at = Utc::now();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
