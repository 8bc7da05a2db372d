//! Resolution outcomes and tool-argument decoding.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The outcome of resolving one intent.
///
/// Exactly one of these is produced per resolution: either the model chose
/// a tool (returning its decoded arguments) or it answered in free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolutionResult {
    /// The model selected a tool. Dispatch is the caller's responsibility.
    ToolInvocation {
        tool_name: String,
        arguments: serde_json::Map<String, Value>,
    },
    /// The model answered with text instead of selecting a tool.
    TextReply { content: String },
}

impl ResolutionResult {
    pub fn is_tool_invocation(&self) -> bool {
        matches!(self, ResolutionResult::ToolInvocation { .. })
    }
}

/// Decode the serialized argument payload attached to a function-call unit.
///
/// The payload must be a JSON object with string keys. Anything else —
/// malformed JSON or a non-object top level — is a decode failure, never
/// silently coerced.
pub fn decode_arguments(raw: &str) -> Result<serde_json::Map<String, Value>, DomainError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DomainError::ArgumentDecode(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::ArgumentsNotObject(type_name(&other).to_string())),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_valid_arguments() {
        let args = decode_arguments(r#"{"throughput_mbps": 60, "latency_ms": 10}"#).unwrap();
        assert_eq!(args["throughput_mbps"], json!(60));
        assert_eq!(args["latency_ms"], json!(10));
    }

    #[test]
    fn test_decode_nested_arguments() {
        let args = decode_arguments(r#"{"qos": {"min_mbps": 60}, "site": "airport"}"#).unwrap();
        assert_eq!(args["qos"]["min_mbps"], json!(60));
        assert_eq!(args["site"], "airport");
    }

    #[test]
    fn test_decode_malformed_payload_fails() {
        let result = decode_arguments(r#"{throughput: 60"#);
        assert!(matches!(result, Err(DomainError::ArgumentDecode(_))));
    }

    #[test]
    fn test_decode_non_object_payload_fails() {
        let result = decode_arguments("[1, 2]");
        match result {
            Err(DomainError::ArgumentsNotObject(kind)) => assert_eq!(kind, "array"),
            other => panic!("Expected ArgumentsNotObject, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_object() {
        let args = decode_arguments("{}").unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_is_tool_invocation() {
        let invocation = ResolutionResult::ToolInvocation {
            tool_name: "book_slice".to_string(),
            arguments: serde_json::Map::new(),
        };
        assert!(invocation.is_tool_invocation());

        let reply = ResolutionResult::TextReply {
            content: "Hello".to_string(),
        };
        assert!(!reply.is_tool_invocation());
    }
}
