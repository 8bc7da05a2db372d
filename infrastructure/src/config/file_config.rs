//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems detected while validating a loaded configuration
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("mcp_server.host must not be empty")]
    EmptyHost,

    #[error("mcp_server.port must not be 0")]
    ZeroPort,

    #[error("llm.model must not be empty")]
    EmptyModel,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// MCP server endpoint settings
    pub mcp_server: FileMcpServerConfig,
    /// LLM provider settings
    pub llm: FileLlmConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first detected problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.mcp_server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }
        if self.mcp_server.port == 0 {
            return Err(ConfigValidationError::ZeroPort);
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModel);
        }
        Ok(())
    }
}

/// `[mcp_server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMcpServerConfig {
    /// Server hostname or address
    pub host: String,
    /// Server port (1-65535)
    pub port: u16,
    /// HTTP path of the MCP endpoint
    pub path: String,
}

impl Default for FileMcpServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            path: "/mcp".to_string(),
        }
    }
}

/// `[llm]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Model identifier sent to the provider
    pub model: String,
    /// Provider API base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
        }
    }
}
