//! Hosted LLM chat-completion client.
//!
//! Minimal, synchronous (non-streaming) client around the OpenRouter REST
//! API (OpenAI-compatible):
//! - POST {endpoint}/chat/completions — chat completion
//! - GET  {endpoint}/models           — model listing / connectivity probe
//!
//! Errors are normalized via the unified types in [`errors`].

mod config;
mod errors;
mod message;
mod service;

pub use config::LlmConfig;
pub use errors::{ConfigError, LlmError};
pub use message::{ChatMessage, ChatRole};
pub use service::{GenerateOptions, ModelInfo, OpenRouterService};
