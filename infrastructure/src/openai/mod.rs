//! OpenAI Responses-API adapter for the [`LlmProvider`] port.
//!
//! [`LlmProvider`]: intent_application::ports::llm_provider::LlmProvider

pub mod api;
pub mod provider;

pub use provider::{OpenAiConfig, OpenAiProvider};
