//! Tool catalog entries.
//!
//! A [`ToolDescriptor`] is one entry of the catalog fetched from an MCP
//! server: a callable operation with a name, a description the model reads
//! to decide when to call it, and a JSON Schema for its input. Descriptors
//! are immutable once fetched; the resolution loop only ever reads them.

use serde::{Deserialize, Serialize};

/// A callable tool discovered from the MCP server's catalog.
///
/// Maps 1:1 to the `tools/list` records (`name`, `description`,
/// `inputSchema`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique name within a catalog (e.g. "book_slice")
    pub name: String,
    /// Human-readable description the model uses for tool selection
    #[serde(default)]
    pub description: String,
    /// JSON Schema for the tool's input
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

impl std::fmt::Display for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_from_catalog_record() {
        let record = json!({
            "name": "book_slice",
            "description": "Book a network slice with QoS guarantees",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "throughput_mbps": {"type": "number"},
                    "latency_ms": {"type": "number"}
                },
                "required": ["throughput_mbps"]
            }
        });

        let tool: ToolDescriptor = serde_json::from_value(record).unwrap();
        assert_eq!(tool.name, "book_slice");
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.input_schema["properties"]["latency_ms"].is_object());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let record = json!({
            "name": "list_slices",
            "inputSchema": {"type": "object"}
        });

        let tool: ToolDescriptor = serde_json::from_value(record).unwrap();
        assert_eq!(tool.description, "");
    }

    #[test]
    fn test_display_is_name() {
        let tool = ToolDescriptor::new("book_slice", "Book a slice", json!({}));
        assert_eq!(tool.to_string(), "book_slice");
    }
}
