//! Sentence-oriented text chunker for long-form reading
//!
//! Splits at `". "` boundaries and accumulates sentences into chunks under a
//! character budget. A single sentence longer than the budget becomes its own
//! oversized chunk rather than being cut mid-sentence.

/// Default chunk budget in characters
pub const DEFAULT_CHUNK_BUDGET: usize = 500;

/// Splits long text into synthesis-sized chunks
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    budget: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            budget: DEFAULT_CHUNK_BUDGET,
        }
    }
}

impl TextChunker {
    /// Create a chunker with the default budget
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with a custom budget
    #[must_use]
    pub const fn with_budget(budget: usize) -> Self {
        Self { budget }
    }

    /// Get the chunk budget
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Split text into chunks under the budget
    ///
    /// Empty or whitespace-only input yields no chunks. Output order equals
    /// input order.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        let mut sentences = text.split(". ").peekable();
        while let Some(sentence) = sentences.next() {
            // Splitting consumed the ". " separator; restore it for every
            // sentence but the last, which keeps its own terminator.
            let restored = if sentences.peek().is_some() {
                format!("{sentence}. ")
            } else {
                sentence.to_string()
            };

            if current.len() + sentence.len() < self.budget {
                current.push_str(&restored);
            } else {
                if !current.is_empty() {
                    chunks.push(current.trim().to_string());
                }
                current = restored;
            }
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }
}
