//! Wire types and response classification for the OpenAI Responses API.
//!
//! A request carries the serialized conversation transcript plus the tool
//! definitions; the response's `output` array holds units that are either
//! an assistant `message` (content parts with `.text`) or a
//! `function_call` (name + serialized arguments string).

use intent_application::ports::llm_provider::ModelOutput;
use intent_domain::ToolDescriptor;
use serde::Serialize;
use serde_json::Value;

/// Request body for `POST /responses`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    /// The conversation transcript, serialized as one JSON string.
    pub input: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<FunctionTool>,
}

/// A tool definition in the provider's function-calling format.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionTool {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl FunctionTool {
    pub fn from_descriptor(tool: &ToolDescriptor) -> Self {
        Self {
            kind: "function",
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.input_schema.clone(),
        }
    }
}

/// Classify one response output unit into a [`ModelOutput`].
///
/// Pure function with no side effects, applied to exactly the first unit
/// of each response.
pub fn classify_output_unit(unit: &Value) -> ModelOutput {
    let kind = unit.get("type").and_then(|v| v.as_str()).unwrap_or("");

    match kind {
        "message" => {
            let parts = unit
                .get("content")
                .and_then(|v| v.as_array())
                .map(|parts| {
                    parts
                        .iter()
                        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            ModelOutput::Message { parts }
        }
        "function_call" => {
            let name = unit
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let arguments = unit
                .get("arguments")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            ModelOutput::FunctionCall {
                name,
                arguments,
                raw: unit.clone(),
            }
        }
        other => ModelOutput::Unrecognized {
            kind: if other.is_empty() {
                "unknown".to_string()
            } else {
                other.to_string()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_message_unit() {
        let unit = json!({
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": "Hello"}]
        });

        match classify_output_unit(&unit) {
            ModelOutput::Message { parts } => assert_eq!(parts, vec!["Hello"]),
            other => panic!("Expected Message, got {:?}", other),
        }
    }

    #[test]
    fn classify_function_call_unit() {
        let unit = json!({
            "type": "function_call",
            "name": "book_slice",
            "arguments": "{\"throughput_mbps\": 60}"
        });

        match classify_output_unit(&unit) {
            ModelOutput::FunctionCall {
                name,
                arguments,
                raw,
            } => {
                assert_eq!(name, "book_slice");
                assert_eq!(arguments, "{\"throughput_mbps\": 60}");
                assert_eq!(raw["type"], "function_call");
            }
            other => panic!("Expected FunctionCall, got {:?}", other),
        }
    }

    #[test]
    fn classify_unknown_unit() {
        let unit = json!({"type": "reasoning", "summary": []});
        match classify_output_unit(&unit) {
            ModelOutput::Unrecognized { kind } => assert_eq!(kind, "reasoning"),
            other => panic!("Expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn classify_untyped_unit() {
        let unit = json!({"data": "something"});
        match classify_output_unit(&unit) {
            ModelOutput::Unrecognized { kind } => assert_eq!(kind, "unknown"),
            other => panic!("Expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn function_tool_from_descriptor() {
        let tool = ToolDescriptor::new(
            "book_slice",
            "Book a network slice",
            json!({"type": "object"}),
        );

        let function = FunctionTool::from_descriptor(&tool);
        let json = serde_json::to_value(&function).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["name"], "book_slice");
        assert_eq!(json["parameters"]["type"], "object");
    }

    #[test]
    fn request_omits_empty_tools() {
        let request = ResponsesRequest {
            model: "gpt-4o-mini".to_string(),
            input: "[]".to_string(),
            tools: Vec::new(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
    }
}
