//! # fixme-rewrite
//!
//! Sends clipboard text to a chat-completions model with instructions to fix
//! grammar and spelling (optionally translating or rephrasing for speech).
//! `MaskedRewriter` wraps any rewriter so URLs survive the round trip.

pub mod client;
pub mod masked;
pub mod prompt;
pub mod protocol;

pub use client::ChatCompletionsClient;
pub use masked::MaskedRewriter;
pub use prompt::system_prompt;
