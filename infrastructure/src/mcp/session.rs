//! MCP session management.
//!
//! Provides [`McpSession`], the initialized protocol handle over the
//! streamable HTTP transport. A session becomes usable only after
//! [`initialize()`](McpSession::initialize) completes; catalog and tool-call
//! operations are invalid before that.

use crate::mcp::error::{McpError, Result};
use crate::mcp::protocol::{
    CallToolParams, InitializeParams, JsonRpcNotification, JsonRpcRequest, ListToolsResult,
};
use crate::mcp::transport::StreamableHttpTransport;
use async_trait::async_trait;
use intent_application::ports::tool_invoker::{InvokeError, ToolInvoker};
use intent_domain::ToolDescriptor;
use serde_json::Value;
use tracing::{debug, info};

/// An initialized MCP protocol session over one transport.
pub struct McpSession {
    transport: StreamableHttpTransport,
}

impl McpSession {
    pub fn new(transport: StreamableHttpTransport) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Perform the MCP handshake: `initialize` followed by the
    /// `notifications/initialized` acknowledgement.
    ///
    /// A handshake that times out is reported as
    /// [`McpError::InitializeAborted`] — in practice this means the URL or
    /// path points at something that is not an MCP endpoint.
    pub async fn initialize(&self) -> Result<()> {
        let params = serde_json::to_value(InitializeParams::default())?;
        let request = JsonRpcRequest::new("initialize", Some(params));

        let response = self.transport.request(&request).await.map_err(|e| match e {
            McpError::Connection { endpoint, source } if source.is_timeout() => {
                McpError::InitializeAborted { endpoint }
            }
            other => other,
        })?;

        debug!("initialize result: {:?}", response.result);

        self.transport
            .notify(&JsonRpcNotification::new("notifications/initialized"))
            .await?;

        Ok(())
    }

    /// Request the tool catalog from the server.
    pub async fn list_tools(&self) -> Result<Vec<ToolDescriptor>> {
        info!("Requesting MCP tools from the server");

        let request = JsonRpcRequest::new("tools/list", None);
        let response = self.transport.request(&request).await?;

        let result = response
            .result
            .ok_or_else(|| McpError::UnexpectedResponse("tools/list returned no result".to_string()))?;
        let listing: ListToolsResult = serde_json::from_value(result)?;

        Ok(listing.tools)
    }

    /// Dispatch one tool call and return the server's raw result.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value> {
        info!("Calling MCP tool '{}'", name);

        let params = CallToolParams {
            name: name.to_string(),
            arguments,
        };
        let request = JsonRpcRequest::new("tools/call", Some(serde_json::to_value(&params)?));
        let response = self.transport.request(&request).await?;

        response
            .result
            .ok_or_else(|| McpError::UnexpectedResponse("tools/call returned no result".to_string()))
    }
}

#[async_trait]
impl ToolInvoker for McpSession {
    async fn invoke(
        &self,
        tool_name: &str,
        arguments: &serde_json::Map<String, Value>,
    ) -> std::result::Result<Value, InvokeError> {
        self.call_tool(tool_name, Value::Object(arguments.clone()))
            .await
            .map_err(|e| match e {
                McpError::Rpc { code, message } => InvokeError::ToolFailed {
                    tool: tool_name.to_string(),
                    message: format!("code {}: {}", code, message),
                },
                other => InvokeError::Transport(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::transport::{StreamableHttpTransport, endpoint_url};
    use std::time::Duration;

    #[tokio::test]
    async fn test_unresponsive_endpoint_aborts_initialize() {
        // The listener accepts connections but never answers, so the
        // initialize request runs into the client timeout.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let endpoint = endpoint_url("127.0.0.1", port, "/mcp");
        let transport =
            StreamableHttpTransport::new(&endpoint, Duration::from_millis(200)).unwrap();
        let session = McpSession::new(transport);

        match session.initialize().await {
            Err(McpError::InitializeAborted { endpoint: reported }) => {
                assert_eq!(reported, endpoint);
            }
            other => panic!("Expected InitializeAborted, got {:?}", other),
        }

        drop(listener);
    }
}
