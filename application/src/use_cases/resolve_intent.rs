//! Resolve Intent use case.
//!
//! Drives the LLM through zero-or-more turns until it either selects a tool
//! from the catalog or answers in free text. This is the conversation-state
//! machine at the heart of the broker: one intent in, exactly one
//! [`ResolutionResult`] out.
//!
//! The loop is bounded by `max_turns` — a provider that keeps returning
//! unrecognized output shapes runs out of turns and fails with a distinct
//! error instead of spinning forever.

use crate::ports::llm_provider::{LlmProvider, ModelOutput, ProviderError};
use intent_domain::{Conversation, DomainError, ResolutionResult, ToolDescriptor, Turn, decode_arguments};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default bound on provider calls per resolution.
const DEFAULT_MAX_TURNS: usize = 8;

/// Errors that can occur during intent resolution.
#[derive(Error, Debug)]
pub enum ResolveIntentError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Tool '{tool}' returned undecodable arguments: {source}")]
    ArgumentDecode {
        tool: String,
        #[source]
        source: DomainError,
    },

    #[error("Model selected tool '{tool}' which is not in the catalog")]
    UnknownTool { tool: String },

    #[error("Provider produced no usable output within {limit} turns")]
    TurnsExhausted { limit: usize },
}

/// Use case for resolving one free-text intent against a tool catalog.
///
/// 1. Start a conversation with the intent as its single user turn
/// 2. Send transcript + tool schemas to the provider
/// 3. A single-part message terminates with [`ResolutionResult::TextReply`];
///    a function call terminates with [`ResolutionResult::ToolInvocation`]
/// 4. Anything else re-issues the request, up to `max_turns`
///
/// The loop never retries provider failures and never dispatches the
/// resolved tool call — both are caller concerns.
pub struct ResolveIntentUseCase {
    provider: Arc<dyn LlmProvider>,
    max_turns: usize,
}

impl ResolveIntentUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Override the per-resolution turn limit.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Resolve `intent` into exactly one result.
    ///
    /// `tools` may be empty, in which case only a text reply (or an error)
    /// is possible. Returns the result together with the final transcript.
    pub async fn execute(
        &self,
        intent: &str,
        tools: &[ToolDescriptor],
    ) -> Result<ResolutionResult, ResolveIntentError> {
        let (result, _) = self.execute_with_transcript(intent, tools).await?;
        Ok(result)
    }

    /// Like [`execute`](Self::execute), but also returns the conversation
    /// transcript as it stood at termination.
    pub async fn execute_with_transcript(
        &self,
        intent: &str,
        tools: &[ToolDescriptor],
    ) -> Result<(ResolutionResult, Conversation), ResolveIntentError> {
        info!("Processing intent: {}", intent);

        let mut conversation = Conversation::new(intent);

        for turn in 1..=self.max_turns {
            debug!(
                "Calling LLM provider (turn {}/{}, {} tools)",
                turn,
                self.max_turns,
                tools.len()
            );

            let output = self.provider.infer(&conversation, tools).await?;

            match output {
                ModelOutput::Message { parts } if parts.len() == 1 => {
                    let content = parts.into_iter().next().unwrap_or_default();
                    conversation.push(Turn::assistant_text(content.clone()));
                    return Ok((ResolutionResult::TextReply { content }, conversation));
                }
                ModelOutput::Message { parts } => {
                    // Multi-part or empty messages don't terminate; re-issue
                    // with the unchanged transcript.
                    warn!(
                        "Message with {} content parts is not terminal; re-issuing",
                        parts.len()
                    );
                }
                ModelOutput::FunctionCall {
                    name,
                    arguments,
                    raw,
                } => {
                    conversation.push(Turn::assistant_tool_call(raw));

                    // Only catalog tools are valid targets. A call naming
                    // anything else (including any call when the catalog is
                    // empty) is a hallucination, not an invocation.
                    if !tools.iter().any(|t| t.name == name) {
                        return Err(ResolveIntentError::UnknownTool { tool: name });
                    }

                    let arguments = decode_arguments(&arguments).map_err(|source| {
                        ResolveIntentError::ArgumentDecode {
                            tool: name.clone(),
                            source,
                        }
                    })?;

                    info!("Intent resolved to tool '{}'", name);
                    return Ok((
                        ResolutionResult::ToolInvocation {
                            tool_name: name,
                            arguments,
                        },
                        conversation,
                    ));
                }
                ModelOutput::Unrecognized { kind } => {
                    warn!("Unrecognized response unit '{}'; re-issuing", kind);
                }
            }
        }

        Err(ResolveIntentError::TurnsExhausted {
            limit: self.max_turns,
        })
    }
}
