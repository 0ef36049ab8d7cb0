//! In-memory conversation registry
//!
//! Conversations live for the lifetime of the process. There is no
//! persistence; restarting the server clears all history.

use std::collections::HashMap;

use domain::{Conversation, ConversationId, ConversationTurn, DomainError};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::ApplicationError;

/// Registry of active conversations keyed by ID
#[derive(Debug, Default)]
pub struct ConversationRegistry {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl ConversationRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an existing conversation or start a new one
    ///
    /// A `None` ID always starts a fresh conversation. An unknown ID is
    /// accepted and registered as-is, so clients may mint their own IDs.
    pub fn resolve(&self, id: Option<ConversationId>) -> ConversationId {
        let mut conversations = self.conversations.write();

        match id {
            Some(id) => {
                conversations
                    .entry(id)
                    .or_insert_with(|| Conversation::with_id(id));
                id
            },
            None => {
                let conversation = Conversation::new();
                let id = conversation.id;
                debug!(conversation_id = %id, "Started new conversation");
                conversations.insert(id, conversation);
                id
            },
        }
    }

    /// Get the context window (most recent turns) for a conversation
    ///
    /// Unknown conversations yield an empty window.
    #[must_use]
    pub fn context_window(&self, id: ConversationId) -> Vec<ConversationTurn> {
        self.conversations
            .read()
            .get(&id)
            .map(|c| c.context_window().to_vec())
            .unwrap_or_default()
    }

    /// Record a completed exchange in a conversation
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the conversation does not exist.
    pub fn record_turn(
        &self,
        id: ConversationId,
        human: impl Into<String>,
        ai: impl Into<String>,
    ) -> Result<(), ApplicationError> {
        let mut conversations = self.conversations.write();

        let conversation = conversations
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Conversation", id.to_string()))?;

        conversation.add_turn(ConversationTurn::new(human, ai));
        Ok(())
    }

    /// Get the full turn history for a conversation
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the conversation does not exist.
    pub fn history(&self, id: ConversationId) -> Result<Vec<ConversationTurn>, ApplicationError> {
        self.conversations
            .read()
            .get(&id)
            .map(|c| c.turns.clone())
            .ok_or_else(|| DomainError::not_found("Conversation", id.to_string()).into())
    }

    /// Clear all turns in a conversation, keeping the conversation itself
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the conversation does not exist.
    pub fn clear(&self, id: ConversationId) -> Result<(), ApplicationError> {
        let mut conversations = self.conversations.write();

        let conversation = conversations
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Conversation", id.to_string()))?;

        conversation.clear();
        debug!(conversation_id = %id, "Cleared conversation history");
        Ok(())
    }

    /// Number of tracked conversations
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.read().len()
    }

    /// Check whether no conversations are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.read().is_empty()
    }
}
