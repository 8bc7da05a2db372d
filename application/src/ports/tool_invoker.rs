//! Tool invoker port
//!
//! The resolution loop stops at a decoded [`ResolutionResult::ToolInvocation`]
//! (see [`intent_domain::ResolutionResult`]); actually dispatching that call
//! against the MCP server is a separate, explicit operation behind this port.
//! The loop itself never invokes it.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while dispatching a tool call
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Tool call transport error: {0}")]
    Transport(String),

    #[error("Tool '{tool}' failed: {message}")]
    ToolFailed { tool: String, message: String },
}

/// Port for dispatching a resolved tool invocation
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    /// Call `tool_name` with the decoded arguments and return the raw result.
    async fn invoke(
        &self,
        tool_name: &str,
        arguments: &serde_json::Map<String, Value>,
    ) -> Result<Value, InvokeError>;
}
