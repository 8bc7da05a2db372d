//! Domain layer for intent-broker
//!
//! This crate contains the core data model for intent resolution: the tool
//! catalog entries discovered from an MCP server, the conversation exchanged
//! with the LLM, and the final resolution outcome. It has no dependencies on
//! infrastructure or transport concerns.
//!
//! # Core Concepts
//!
//! ## Intent
//!
//! A free-text user statement describing a desired outcome (e.g. a
//! network-slice QoS request). One intent is resolved into exactly one
//! [`ResolutionResult`].
//!
//! ## Conversation
//!
//! An append-only transcript of [`Turn`]s for a single resolution. It starts
//! with one user turn and ends with either an assistant text turn or an
//! assistant tool-call turn.

pub mod conversation;
pub mod core;
pub mod resolution;
pub mod tool;

// Re-export commonly used types
pub use conversation::{Conversation, Turn};
pub use crate::core::error::DomainError;
pub use resolution::{ResolutionResult, decode_arguments};
pub use tool::ToolDescriptor;
