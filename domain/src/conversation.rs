//! Conversation transcript for one intent resolution.
//!
//! A [`Conversation`] is the ordered sequence of [`Turn`]s exchanged with
//! the LLM while resolving a single intent. It is created with exactly one
//! user turn, mutated only by appends, and lives for exactly one resolve
//! call — it is never persisted or reordered.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One contribution to the conversation.
#[derive(Debug, Clone)]
pub enum Turn {
    /// The user's free-text intent.
    User { content: String },
    /// A terminal text reply from the assistant.
    AssistantText { content: String },
    /// A tool-call decision from the assistant, kept as the provider's raw
    /// payload so the transcript round-trips losslessly.
    AssistantToolCall { raw_call: serde_json::Value },
}

// Serialized in the shape the provider expects back as input: role-tagged
// text turns, and the provider's own payload for tool calls.
impl Serialize for Turn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Turn::User { content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("role", "user")?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            Turn::AssistantText { content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("role", "assistant")?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            Turn::AssistantToolCall { raw_call } => raw_call.serialize(serializer),
        }
    }
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Turn::User {
            content: content.into(),
        }
    }

    pub fn assistant_text(content: impl Into<String>) -> Self {
        Turn::AssistantText {
            content: content.into(),
        }
    }

    pub fn assistant_tool_call(raw_call: serde_json::Value) -> Self {
        Turn::AssistantToolCall { raw_call }
    }

    /// Whether this turn terminates a resolution.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Turn::AssistantText { .. } | Turn::AssistantToolCall { .. }
        )
    }
}

/// Append-only transcript of one intent resolution.
///
/// Invariant: starts with exactly one [`Turn::User`]; once a terminal turn
/// has been appended the conversation is complete.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a conversation from the user's intent.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::user(intent)],
        }
    }

    /// Append a turn. Appends are the only mutation.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Whether a terminal assistant turn has been appended.
    pub fn is_complete(&self) -> bool {
        self.last().is_some_and(Turn::is_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_has_single_user_turn() {
        let conversation = Conversation::new("book me a slice");
        assert_eq!(conversation.len(), 1);
        assert!(matches!(conversation.turns()[0], Turn::User { .. }));
        assert!(!conversation.is_complete());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut conversation = Conversation::new("intent");
        conversation.push(Turn::assistant_text("reply"));

        assert_eq!(conversation.len(), 2);
        assert!(matches!(conversation.turns()[0], Turn::User { .. }));
        assert!(matches!(conversation.turns()[1], Turn::AssistantText { .. }));
    }

    #[test]
    fn test_text_turn_completes_conversation() {
        let mut conversation = Conversation::new("intent");
        conversation.push(Turn::assistant_text("done"));
        assert!(conversation.is_complete());
    }

    #[test]
    fn test_tool_call_turn_completes_conversation() {
        let mut conversation = Conversation::new("intent");
        conversation.push(Turn::assistant_tool_call(json!({
            "type": "function_call",
            "name": "book_slice",
            "arguments": "{}"
        })));
        assert!(conversation.is_complete());
    }

    #[test]
    fn test_text_turns_serialize_with_wire_roles() {
        let turn = Turn::user("hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");

        let turn = Turn::assistant_text("hi");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_tool_call_turn_serializes_as_raw_payload() {
        let raw = json!({
            "type": "function_call",
            "name": "book_slice",
            "arguments": "{\"throughput_mbps\": 60}",
            "call_id": "call_1"
        });
        let turn = Turn::assistant_tool_call(raw.clone());

        assert_eq!(serde_json::to_value(&turn).unwrap(), raw);
    }
}
