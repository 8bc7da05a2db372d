//! Infrastructure layer for intent-broker
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the MCP streamable-HTTP connection, the OpenAI
//! provider, and configuration file loading.

pub mod config;
pub mod mcp;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileLlmConfig, FileMcpServerConfig};
pub use mcp::{
    connection::{ConnectionState, McpConnection},
    error::{McpError, Result},
    session::McpSession,
    transport::StreamableHttpTransport,
};
pub use openai::{OpenAiConfig, OpenAiProvider};
