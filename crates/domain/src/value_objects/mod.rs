//! Value objects - Immutable identifiers and small typed values

mod conversation_id;
mod voice_id;

pub use conversation_id::ConversationId;
pub use voice_id::VoiceId;
