//! Ollama HTTP API contracts
//!
//! - types.rs: request/response DTOs for generate, chat, tags, show, embed, version
//! - extract.rs: tolerant extraction of completion text from response bodies

pub mod extract;
pub mod types;

pub use extract::{extract_chat_text, extract_completion_text};
pub use types::*;
