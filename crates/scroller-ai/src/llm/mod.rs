//! LLM module - provider abstraction for the assist flows

mod client;
mod gemini;
mod mock_client;

pub use client::{CompletionRequest, CompletionResponse, LlmClient, Message, Role, TokenUsage};
pub use gemini::GeminiClient;
pub use mock_client::{MockLlmClient, MockStep};
