//! Application layer for intent-broker
//!
//! This crate contains the intent resolution use case and the port
//! definitions it depends on. It depends only on the domain layer;
//! adapters for the ports live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_provider::{LlmProvider, ModelOutput, ProviderError},
    tool_invoker::{InvokeError, ToolInvoker},
};
pub use use_cases::resolve_intent::{ResolveIntentError, ResolveIntentUseCase};
