//! LLM provider adapters
//!
//! Every built-in model speaks the OpenAI-compatible chat-completions
//! dialect, so a single adapter covers the whole registry.

pub mod openai;

pub use openai::OpenAiChatGateway;
