//! Configuration file loading for intent-broker
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./broker.toml` or `./.broker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/intent-broker/config.toml`
//! 4. Fallback: `~/.config/intent-broker/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileLlmConfig, FileMcpServerConfig};
pub use loader::ConfigLoader;
