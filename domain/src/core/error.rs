//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to decode tool arguments: {0}")]
    ArgumentDecode(String),

    #[error("Tool arguments must be a JSON object, got {0}")]
    ArgumentsNotObject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_decode_display() {
        let error = DomainError::ArgumentDecode("unexpected token".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to decode tool arguments: unexpected token"
        );
    }

    #[test]
    fn test_arguments_not_object_display() {
        let error = DomainError::ArgumentsNotObject("array".to_string());
        assert_eq!(
            error.to_string(),
            "Tool arguments must be a JSON object, got array"
        );
    }
}
