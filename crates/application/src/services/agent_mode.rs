//! Agent modes and prompt assembly
//!
//! Each operation talks to the LLM under a mode-specific system string. The
//! final prompt embeds that string, up to the five most recent conversation
//! turns, and the current question.

use domain::ConversationTurn;

/// Persona under which the assistant answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    /// General voice conversation
    Conversational,
    /// Dubbing direction for scripts
    Dubbing,
    /// Voice cloning guidance
    VoiceCloning,
    /// Long-form reading analysis
    Reader,
}

impl AgentMode {
    /// Get the system string for this mode
    #[must_use]
    pub const fn system_prompt(self) -> &'static str {
        match self {
            Self::Conversational => {
                "You are a helpful AI assistant. Provide natural, conversational responses."
            },
            Self::Dubbing => {
                "You are a dubbing director. Help with voice acting, timing, and dubbing suggestions."
            },
            Self::VoiceCloning => {
                "You are a voice technology expert. Provide guidance on voice cloning and synthesis."
            },
            Self::Reader => {
                "You are a professional narrator. Format text for optimal reading and provide reading suggestions."
            },
        }
    }
}

/// Assemble the full prompt for an inference call
///
/// Layout: system string, a blank line, then (when history is present) a
/// `Previous conversation:` block of `Human:`/`AI:` lines followed by
/// `Current question:`, and finally the question itself.
#[must_use]
pub fn build_prompt(mode: AgentMode, history: &[ConversationTurn], question: &str) -> String {
    let mut context = String::from(mode.system_prompt());
    context.push_str("\n\n");

    if !history.is_empty() {
        context.push_str("Previous conversation:\n");
        for turn in history {
            context.push_str(&format!("Human: {}\nAI: {}\n", turn.human, turn.ai));
        }
        context.push_str("\nCurrent question:\n");
    }

    context.push_str(question);
    context
}
