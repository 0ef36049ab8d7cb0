//! Gemini inference client

mod client;

pub use client::GeminiClient;
