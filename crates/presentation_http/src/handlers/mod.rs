//! HTTP request handlers

pub mod chat;
pub mod common;
pub mod health;
pub mod narration;
pub mod reader;
pub mod voices;
