//! MCP client adapter.
//!
//! Connects to an MCP server over the streamable HTTP transport, performs
//! the initialize handshake, fetches the tool catalog, and dispatches tool
//! calls. The connection lifecycle is owned by
//! [`McpConnection`](connection::McpConnection):
//!
//! ```text
//! Disconnected ──> Connecting ──> Connected ──> Closed
//!        ^              │                         ^
//!        └── failure ───┘      cleanup() from any state
//! ```

pub mod connection;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;
