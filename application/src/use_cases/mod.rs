//! Application use cases

pub mod resolve_intent;
