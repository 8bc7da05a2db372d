//! MCP connection lifecycle.
//!
//! [`McpConnection`] owns the session with one MCP server and materializes
//! its tool catalog. One connection carries one logical conversation;
//! exclusive access is enforced through `&mut self`, so concurrent use of a
//! single session is impossible by construction.

use crate::mcp::error::{McpError, Result};
use crate::mcp::session::McpSession;
use crate::mcp::transport::{StreamableHttpTransport, endpoint_url};
use intent_domain::ToolDescriptor;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Lifecycle state of an MCP connection.
///
/// `Closed` is terminal; it is reachable from any state via
/// [`McpConnection::cleanup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Closed,
}

/// Owns the connection to one MCP server and its cached tool catalog.
pub struct McpConnection {
    endpoint: String,
    timeout: Duration,
    state: ConnectionState,
    session: Option<Arc<McpSession>>,
    catalog: Vec<ToolDescriptor>,
}

impl McpConnection {
    /// Create an unconnected manager for `http://{host}:{port}{path}`.
    pub fn new(host: &str, port: u16, path: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint_url(host, port, path),
            timeout,
            state: ConnectionState::Disconnected,
            session: None,
            catalog: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The catalog fetched by the last successful [`connect`](Self::connect).
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.catalog
    }

    /// The live session, for dispatching resolved tool calls.
    pub fn session(&self) -> Option<Arc<McpSession>> {
        self.session.clone()
    }

    /// Open the transport, perform the handshake, and fetch the catalog.
    ///
    /// The connection reaches `Connected` only after both the handshake and
    /// the catalog fetch succeed; any failure in that span returns it to
    /// `Disconnected` and propagates the error. A catalog failure after a
    /// successful handshake surfaces as [`McpError::Catalog`].
    pub async fn connect(&mut self) -> Result<Vec<ToolDescriptor>> {
        if self.state == ConnectionState::Closed {
            return Err(McpError::Closed);
        }

        info!("Attempting to connect to MCP server at {}", self.endpoint);
        self.state = ConnectionState::Connecting;

        match self.try_connect().await {
            Ok((session, tools)) => {
                self.session = Some(Arc::new(session));
                self.catalog = tools.clone();
                self.state = ConnectionState::Connected;

                let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
                info!(
                    "Successfully connected to {}. Available tools: {:?}",
                    self.endpoint, names
                );
                Ok(tools)
            }
            Err(e) => {
                self.state = ConnectionState::Disconnected;
                self.session = None;
                self.catalog.clear();
                error!("Failed to connect to MCP server at {}: {}", self.endpoint, e);
                Err(e)
            }
        }
    }

    async fn try_connect(&self) -> Result<(McpSession, Vec<ToolDescriptor>)> {
        let transport = StreamableHttpTransport::new(&self.endpoint, self.timeout)?;
        let session = McpSession::new(transport);

        session.initialize().await?;

        let tools = session
            .list_tools()
            .await
            .map_err(|e| McpError::Catalog(e.to_string()))?;

        Ok((session, tools))
    }

    /// Release the session and close the connection.
    ///
    /// Idempotent and infallible: safe on a manager that never connected and
    /// on repeated calls. Runs in finally-equivalent paths, so close-time
    /// problems are logged and swallowed rather than masking a primary error.
    pub fn cleanup(&mut self) {
        if self.state == ConnectionState::Closed {
            debug!("cleanup() on an already closed connection; nothing to do");
            return;
        }

        info!("Shutting down MCP connection to {}", self.endpoint);
        self.session = None;
        self.catalog.clear();
        self.state = ConnectionState::Closed;
    }
}

impl Drop for McpConnection {
    fn drop(&mut self) {
        self.cleanup();
    }
}
