//! LLM provider port
//!
//! Defines the single capability the resolution loop needs from an LLM:
//! given a conversation transcript and a set of tool schemas, produce
//! either a tool invocation or a terminal text reply.

use async_trait::async_trait;
use intent_domain::{Conversation, ToolDescriptor};
use thiserror::Error;

/// Errors that can occur during provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Missing or invalid credential: {0}")]
    Credential(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider rejected request (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// The first output unit of a provider response, classified.
///
/// The loop inspects exactly one unit per inference call and decides
/// whether to terminate, decode a tool call, or re-issue the request.
#[derive(Debug, Clone)]
pub enum ModelOutput {
    /// A plain assistant message; `parts` holds its content parts.
    Message { parts: Vec<String> },
    /// A function-call unit with its serialized argument payload.
    FunctionCall {
        name: String,
        arguments: String,
        /// The provider's raw payload, appended verbatim to the transcript.
        raw: serde_json::Value,
    },
    /// Any other response shape (reasoning blocks, refusals, ...).
    Unrecognized { kind: String },
}

/// Gateway to the LLM provider
///
/// This port defines how the application layer consults the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one inference over the full transcript plus the tool schemas,
    /// returning the classified first output unit.
    async fn infer(
        &self,
        conversation: &Conversation,
        tools: &[ToolDescriptor],
    ) -> Result<ModelOutput, ProviderError>;
}
