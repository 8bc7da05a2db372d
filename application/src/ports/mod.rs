//! Port definitions (interfaces to the outside world)

pub mod llm_provider;
pub mod tool_invoker;
