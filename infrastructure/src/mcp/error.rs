//! Error types for the MCP adapter

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that can occur when communicating with an MCP server
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Failed to reach MCP server at {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "Initialize aborted for {endpoint}: the server did not answer the MCP \
         initialize request — the URL or path is likely wrong"
    )]
    InitializeAborted { endpoint: String },

    #[error("Failed to get MCP tools: {0}")]
    Catalog(String),

    #[error("JSON-RPC error (code {code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Connection is closed")]
    Closed,
}
