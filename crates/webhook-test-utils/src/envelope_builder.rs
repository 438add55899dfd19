//! Builder for webhook envelopes
//!
//! Provides a fluent API for creating `{ event, event_ts, payload }` bodies.

use crate::test_ids::{TEST_ACCOUNT_ID, TEST_EVENT_TS};
use serde_json::{json, Map, Value};

/// Builder for test webhook envelopes
///
/// # Example
/// ```rust,ignore
/// let body = EnvelopeBuilder::new("meeting.participant_joined")
///     .with_object(json!({"uuid": "u1", "participant": {"user_name": "Ada"}}))
///     .to_body();
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    event: Value,
    event_ts: Option<Value>,
    payload: Option<Map<String, Value>>,
}

impl EnvelopeBuilder {
    /// Create an envelope for `event` with the fixed timestamp and account
    pub fn new(event: &str) -> Self {
        let mut payload = Map::new();
        payload.insert("account_id".to_string(), json!(TEST_ACCOUNT_ID));
        Self {
            event: json!(event),
            event_ts: Some(json!(TEST_EVENT_TS)),
            payload: Some(payload),
        }
    }

    /// Replace the `event` field with an arbitrary value
    pub fn with_raw_event(mut self, event: Value) -> Self {
        self.event = event;
        self
    }

    /// Set `event_ts`
    pub fn at(mut self, event_ts: i64) -> Self {
        self.event_ts = Some(json!(event_ts));
        self
    }

    /// Drop `event_ts` from the envelope
    pub fn without_timestamp(mut self) -> Self {
        self.event_ts = None;
        self
    }

    /// Set `payload.object`
    pub fn with_object(self, object: Value) -> Self {
        self.with_payload_field("object", object)
    }

    /// Set `payload.old_object`
    pub fn with_old_object(self, object: Value) -> Self {
        self.with_payload_field("old_object", object)
    }

    /// Set any payload field
    pub fn with_payload_field(mut self, field: &str, value: Value) -> Self {
        self.payload
            .get_or_insert_with(Map::new)
            .insert(field.to_string(), value);
        self
    }

    /// Replace the whole payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = match payload {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => panic!("payload fixture must be an object, got {other}"),
        };
        self
    }

    /// Drop `payload` from the envelope
    pub fn without_payload(mut self) -> Self {
        self.payload = None;
        self
    }

    /// Build the envelope as a JSON value
    pub fn build(self) -> Value {
        let mut envelope = Map::new();
        envelope.insert("event".to_string(), self.event);
        if let Some(event_ts) = self.event_ts {
            envelope.insert("event_ts".to_string(), event_ts);
        }
        if let Some(payload) = self.payload {
            envelope.insert("payload".to_string(), Value::Object(payload));
        }
        Value::Object(envelope)
    }

    /// Build the envelope as a compact JSON body
    pub fn to_body(self) -> String {
        self.build().to_string()
    }
}
