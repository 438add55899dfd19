//! Buffered, non-destructively peekable JSON document.
//!
//! Union resolution has to read a discriminator before it knows which type
//! to decode the object as, so a single-pass streaming decoder cannot be
//! used. `RawDocument` materializes the value as a `serde_json::Value` tree;
//! the resolved type is then decoded from that same tree. Polymorphic objects
//! are therefore walked twice, which is the accepted price for tolerating
//! the platform's schema.

use crate::error::CodecError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An in-memory parse of one JSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    root: Value,
}

impl RawDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Json` if the text is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        Ok(Self {
            root: serde_json::from_str(text)?,
        })
    }

    /// Parse a document from raw bytes (e.g. an HTTP request body).
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Json` if the bytes are not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Self {
            root: serde_json::from_slice(bytes)?,
        })
    }

    /// Wrap an already materialized value.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The root value.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Whether the document is JSON `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.root.is_null()
    }

    /// Read the value at `path` without consuming the document.
    ///
    /// Each path segment is an object key. Returns `None` if any segment is
    /// absent or an intermediate value is not an object. A field that is
    /// present with a `null` value is returned as `Some(&Value::Null)`.
    #[must_use]
    pub fn peek(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.root, |node, key| node.get(*key))
    }

    /// Read a string field at `path`.
    #[must_use]
    pub fn peek_str(&self, path: &[&str]) -> Option<&str> {
        self.peek(path).and_then(Value::as_str)
    }

    /// Remove and return the value at a top-level `field`, leaving `null` in
    /// its place.
    pub fn take_field(&mut self, field: &str) -> Option<Value> {
        self.root.get_mut(field).map(Value::take)
    }

    /// Decode the whole document as `T`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Entity` if the document does not map onto `T`.
    pub fn decode_as<T: DeserializeOwned>(&self) -> Result<T, CodecError> {
        T::deserialize(&self.root).map_err(|source| CodecError::Entity {
            target: std::any::type_name::<T>(),
            source,
        })
    }

    /// Consume the document and return the root value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl From<Value> for RawDocument {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_invalid_json() {
        let result = RawDocument::parse("{not json");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_peek_nested_path() {
        let doc = RawDocument::parse(r#"{"payload":{"object":{"type":2}}}"#).unwrap();

        assert_eq!(doc.peek(&["payload", "object", "type"]), Some(&json!(2)));
        assert_eq!(doc.peek(&["payload", "missing"]), None);
    }

    #[test]
    fn test_peek_is_non_destructive() {
        let doc = RawDocument::from_value(json!({"type": 3, "topic": "Standup"}));

        let _ = doc.peek(&["type"]);
        let _ = doc.peek(&["type"]);

        assert_eq!(doc.root(), &json!({"type": 3, "topic": "Standup"}));
    }

    #[test]
    fn test_peek_distinguishes_null_from_missing() {
        let doc = RawDocument::from_value(json!({"type": null}));

        assert_eq!(doc.peek(&["type"]), Some(&Value::Null));
        assert_eq!(doc.peek(&["kind"]), None);
    }

    #[test]
    fn test_peek_through_non_object() {
        let doc = RawDocument::from_value(json!({"type": [1, 2]}));
        assert_eq!(doc.peek(&["type", "inner"]), None);
    }

    #[test]
    fn test_peek_empty_path_returns_root() {
        let doc = RawDocument::from_value(json!(7));
        assert_eq!(doc.peek(&[]), Some(&json!(7)));
    }

    #[test]
    fn test_into_value_returns_root() {
        let root = json!({"type": 2, "topic": "Standup"});
        assert_eq!(RawDocument::from_value(root.clone()).into_value(), root);
    }

    #[test]
    fn test_take_field_leaves_null() {
        let mut doc = RawDocument::from_value(json!({"payload": {"a": 1}, "event": "x"}));

        let taken = doc.take_field("payload");

        assert_eq!(taken, Some(json!({"a": 1})));
        assert_eq!(doc.peek(&["payload"]), Some(&Value::Null));
        assert_eq!(doc.peek_str(&["event"]), Some("x"));
    }
}
