//! Codec error taxonomy.
//!
//! Every variant here is a hard failure that aborts the conversion it was
//! raised in. Soft failures (a malformed key/value entry, an unknown webhook
//! event type) never surface as errors: the entry is dropped or the event is
//! carried as-is.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while converting between JSON and domain types.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Wrong token kind or shape for the target scalar.
    #[error("cannot convert {value} to {shape}")]
    MalformedScalar {
        /// The offending raw value, rendered as JSON.
        value: String,
        /// Human readable name of the expected shape.
        shape: &'static str,
    },

    /// Null or empty input where a value is required.
    #[error("cannot convert null/empty value to {shape}")]
    NullOrEmpty {
        /// Human readable name of the expected shape.
        shape: &'static str,
    },

    /// Discriminator value with no entry in the union's table.
    #[error("unknown discriminator {value} for union {union}")]
    UnknownDiscriminator {
        /// The discriminator value, rendered as JSON.
        value: String,
        /// Name of the union being resolved.
        union: &'static str,
    },

    /// A field required to route the document is absent.
    #[error("missing field '{field}' required by {target}")]
    MissingField {
        /// Dotted path of the missing field.
        field: String,
        /// The type or structure that required it.
        target: &'static str,
    },

    /// Field-level failure while mapping an object onto a modeled type.
    #[error("failed to decode {target}: {source}")]
    Entity {
        /// Name of the modeled type.
        target: &'static str,
        /// Underlying mapping error, carrying nested scalar/union messages.
        source: serde_json::Error,
    },

    /// Input text was not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Build a `MalformedScalar` error naming the raw value and the shape.
    #[must_use]
    pub fn malformed(raw: &Value, shape: &'static str) -> Self {
        CodecError::MalformedScalar {
            value: render(raw),
            shape,
        }
    }

    /// Build an `UnknownDiscriminator` error.
    #[must_use]
    pub fn unknown_discriminator(raw: &Value, union: &'static str) -> Self {
        CodecError::UnknownDiscriminator {
            value: render(raw),
            union,
        }
    }
}

/// Render a raw value for an error message.
///
/// Strings are rendered with their quotes so that an empty or whitespace
/// literal stays visible in the message.
fn render(raw: &Value) -> String {
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_names_value_and_shape() {
        let err = CodecError::malformed(&json!("2024-13"), "date (yyyy-MM-dd)");
        let message = err.to_string();

        assert!(message.contains("\"2024-13\""));
        assert!(message.contains("date (yyyy-MM-dd)"));
    }

    #[test]
    fn test_null_or_empty_message() {
        let err = CodecError::NullOrEmpty { shape: "date" };
        assert_eq!(err.to_string(), "cannot convert null/empty value to date");
    }

    #[test]
    fn test_unknown_discriminator_names_value_and_union() {
        let err = CodecError::unknown_discriminator(&json!(42), "Meeting");
        let message = err.to_string();

        assert!(message.contains("42"));
        assert!(message.contains("Meeting"));
    }
}
