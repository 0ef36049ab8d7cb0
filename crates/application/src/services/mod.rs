//! Application services - Use case implementations

mod agent_mode;
mod chat_service;
mod cloning_service;
mod conversation_registry;
mod narration_service;
mod reader_service;
mod text_chunker;

pub use agent_mode::{AgentMode, build_prompt};
pub use chat_service::{ChatReply, ChatService, VoiceChatReply};
pub use cloning_service::CloningService;
pub use conversation_registry::ConversationRegistry;
pub use narration_service::{Narration, NarrationService};
pub use reader_service::{Reading, ReaderService};
pub use text_chunker::{DEFAULT_CHUNK_BUDGET, TextChunker};
