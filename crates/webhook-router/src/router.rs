//! Envelope decoding and dispatch.
//!
//! A delivery is an envelope:
//!
//! ```json
//! { "event": "meeting.started", "event_ts": 1700000000, "payload": { ... } }
//! ```
//!
//! The router peeks `event`, looks up its decoder in the registry and hands
//! it the `payload`. Event types without a registry entry are not errors:
//! they come back as [`WebhookEvent::Unknown`] with the payload untouched.

use crate::challenge::{validation_response, ValidationResponse, URL_VALIDATION_EVENT};
use crate::error::RouterError;
use crate::events::{EndpointEvent, UnknownEvent, Webhook, WebhookEvent};
use crate::registry::EventRegistry;
use crate::signature::{check_freshness_at, verify_signature};
use chrono::{DateTime, Utc};
use common::config::{TimestampPrecision, WebhookConfig, DEFAULT_MAX_SIGNATURE_AGE_SECONDS};
use common::secret::SecretString;
use serde_json::{Map, Value};
use wire_codec::scalar::{EpochMillis, EpochSeconds, ScalarCodec};
use wire_codec::{CodecError, RawDocument};

const EVENT_FIELD: &str = "event";
const TIMESTAMP_FIELD: &str = "event_ts";
const PAYLOAD_FIELD: &str = "payload";
const ENVELOPE: &str = "webhook envelope";

/// Decodes and encodes webhook envelopes against a registry.
#[derive(Debug, Clone, Copy)]
pub struct EventRouter<'r> {
    registry: &'r EventRegistry,
    precision: TimestampPrecision,
    max_signature_age_seconds: u64,
}

impl Default for EventRouter<'static> {
    fn default() -> Self {
        Self::new(EventRegistry::shared())
    }
}

impl<'r> EventRouter<'r> {
    /// Router over `registry` with second-precision timestamps.
    #[must_use]
    pub fn new(registry: &'r EventRegistry) -> Self {
        Self {
            registry,
            precision: TimestampPrecision::default(),
            max_signature_age_seconds: DEFAULT_MAX_SIGNATURE_AGE_SECONDS,
        }
    }

    /// Router over `registry` configured from `config`.
    #[must_use]
    pub fn from_config(registry: &'r EventRegistry, config: &WebhookConfig) -> Self {
        Self::new(registry)
            .with_timestamp_precision(config.timestamp_precision)
            .with_max_signature_age(config.max_signature_age_seconds)
    }

    #[must_use]
    pub fn with_timestamp_precision(mut self, precision: TimestampPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Freshness window for signed timestamps.
    #[must_use]
    pub fn with_max_signature_age(mut self, seconds: u64) -> Self {
        self.max_signature_age_seconds = seconds;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &'r EventRegistry {
        self.registry
    }

    // ---- decode ----

    /// Decode an envelope from JSON text.
    ///
    /// # Errors
    ///
    /// - `CodecError::Json` if the text is not JSON
    /// - `CodecError::MissingField` if `event` is absent
    /// - `CodecError::MalformedScalar` if `event` is not a string or
    ///   `event_ts` is not an integer
    /// - any error raised by the payload decoder
    pub fn decode(&self, body: &str) -> Result<Webhook, RouterError> {
        self.decode_document(RawDocument::parse(body)?)
    }

    /// Decode an envelope from raw bytes.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode).
    pub fn decode_slice(&self, body: &[u8]) -> Result<Webhook, RouterError> {
        self.decode_document(RawDocument::from_slice(body)?)
    }

    /// Decode an already parsed envelope.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), minus the JSON syntax error.
    pub fn decode_value(&self, envelope: Value) -> Result<Webhook, RouterError> {
        self.decode_document(RawDocument::from_value(envelope))
    }

    /// Decode a buffered envelope.
    ///
    /// # Errors
    ///
    /// As [`decode_value`](Self::decode_value).
    pub fn decode_document(&self, mut document: RawDocument) -> Result<Webhook, RouterError> {
        if !document.root().is_object() {
            return Err(CodecError::malformed(document.root(), ENVELOPE).into());
        }

        let event_type = match document.peek(&[EVENT_FIELD]) {
            None | Some(Value::Null) => {
                return Err(CodecError::MissingField {
                    field: EVENT_FIELD.to_string(),
                    target: ENVELOPE,
                }
                .into())
            }
            Some(Value::String(event_type)) => event_type.clone(),
            Some(other) => return Err(CodecError::malformed(other, "event type").into()),
        };

        let timestamp = self.read_timestamp(&document, &event_type)?;
        let payload = document.take_field(PAYLOAD_FIELD);

        let event = match self.registry.get(&event_type) {
            Some(decode) => decode(payload.as_ref())?,
            None => {
                tracing::warn!(
                    target: "webhook_router.router",
                    event_type = %event_type,
                    "Unregistered event type, passing payload through"
                );
                WebhookEvent::Unknown(UnknownEvent {
                    event_type,
                    payload: payload.unwrap_or(Value::Null),
                })
            }
        };

        tracing::debug!(
            target: "webhook_router.router",
            event_type = event.event_type(),
            event_ts = %timestamp,
            "Decoded webhook"
        );

        Ok(Webhook { timestamp, event })
    }

    fn read_timestamp(
        &self,
        document: &RawDocument,
        event_type: &str,
    ) -> Result<DateTime<Utc>, CodecError> {
        match document.peek(&[TIMESTAMP_FIELD]) {
            None | Some(Value::Null) => {
                tracing::debug!(
                    target: "webhook_router.router",
                    event_type = %event_type,
                    "Envelope has no event_ts, using the Unix epoch"
                );
                Ok(DateTime::<Utc>::UNIX_EPOCH)
            }
            Some(raw) => match self.precision {
                TimestampPrecision::Seconds => EpochSeconds::decode(raw),
                TimestampPrecision::Milliseconds => EpochMillis::decode(raw),
            },
        }
    }

    // ---- encode ----

    /// Encode a webhook back into an envelope.
    ///
    /// Empty nested objects in the payload are pruned. An unknown event
    /// re-emits its payload as received.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Entity` if the payload fails to serialize.
    pub fn encode(&self, webhook: &Webhook) -> Result<Value, RouterError> {
        let event_ts = match self.precision {
            TimestampPrecision::Seconds => EpochSeconds::encode(&webhook.timestamp),
            TimestampPrecision::Milliseconds => EpochMillis::encode(&webhook.timestamp),
        };

        let mut envelope = Map::new();
        envelope.insert(
            EVENT_FIELD.to_string(),
            Value::String(webhook.event_type().to_string()),
        );
        envelope.insert(TIMESTAMP_FIELD.to_string(), event_ts);

        let payload = webhook.event.encode_payload()?;
        if !payload.is_null() {
            envelope.insert(PAYLOAD_FIELD.to_string(), payload);
        }

        Ok(Value::Object(envelope))
    }

    // ---- challenge / signatures ----

    /// Decode a validation envelope and build its response.
    ///
    /// # Errors
    ///
    /// - `RouterError::NotAValidationEvent` for any other event type
    /// - `CodecError::MissingField` if the payload has no `plainToken`
    /// - any error raised while decoding the envelope
    pub fn respond_to_challenge(
        &self,
        body: &str,
        secret: &SecretString,
    ) -> Result<ValidationResponse, RouterError> {
        let payload = match self.decode(body)?.event {
            WebhookEvent::Endpoint(EndpointEvent::UrlValidation(payload)) => payload,
            other => {
                return Err(RouterError::NotAValidationEvent(
                    other.event_type().to_string(),
                ))
            }
        };

        let plain_token = payload.plain_token.ok_or_else(|| CodecError::MissingField {
            field: format!("{PAYLOAD_FIELD}.plainToken"),
            target: URL_VALIDATION_EVENT,
        })?;

        tracing::info!(target: "webhook_router.router", "Answering endpoint validation challenge");
        Ok(validation_response(&plain_token, secret))
    }

    /// Verify a delivery's signature and freshness, then decode it.
    ///
    /// # Errors
    ///
    /// - `RouterError::InvalidSignature` if the signature does not match
    /// - `RouterError::StaleTimestamp` if the signed timestamp is outside the
    ///   freshness window
    /// - any error raised by [`decode_slice`](Self::decode_slice)
    pub fn verify_and_decode(
        &self,
        body: &[u8],
        timestamp: &str,
        signature: &str,
        secret: &SecretString,
    ) -> Result<Webhook, RouterError> {
        self.verify_and_decode_at(body, timestamp, signature, secret, Utc::now())
    }

    /// [`verify_and_decode`](Self::verify_and_decode) against a fixed clock.
    ///
    /// # Errors
    ///
    /// As [`verify_and_decode`](Self::verify_and_decode).
    pub fn verify_and_decode_at(
        &self,
        body: &[u8],
        timestamp: &str,
        signature: &str,
        secret: &SecretString,
        now: DateTime<Utc>,
    ) -> Result<Webhook, RouterError> {
        verify_signature(secret, timestamp, body, signature)?;
        check_freshness_at(timestamp, self.max_signature_age_seconds, now)?;
        self.decode_slice(body)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::events::{MeetingEvent, ObjectPayload};
    use serde_json::json;

    fn router() -> EventRouter<'static> {
        EventRouter::new(EventRegistry::shared())
    }

    // ---- envelope ----

    #[test]
    fn test_unknown_event_passes_payload_through() {
        let payload = json!({"object": {"anything": [1, 2, 3]}, "extra": null});
        let webhook = router()
            .decode_value(json!({
                "event": "meeting.teleported",
                "event_ts": 1_700_000_000,
                "payload": payload.clone()
            }))
            .unwrap();

        assert!(webhook.event.is_unknown());
        assert_eq!(webhook.event_type(), "meeting.teleported");
        assert_eq!(
            webhook.event,
            WebhookEvent::Unknown(UnknownEvent {
                event_type: "meeting.teleported".to_string(),
                payload,
            })
        );
    }

    #[test]
    fn test_missing_event_is_hard_failure() {
        let err = router().decode(r#"{"event_ts": 1, "payload": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            RouterError::Codec(CodecError::MissingField { ref field, .. }) if field == "event"
        ));
    }

    #[test]
    fn test_non_string_event_is_hard_failure() {
        let err = router().decode(r#"{"event": 42}"#).unwrap_err();
        assert!(matches!(
            err,
            RouterError::Codec(CodecError::MalformedScalar { .. })
        ));
    }

    #[test]
    fn test_non_object_envelope_is_rejected() {
        let err = router().decode("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            RouterError::Codec(CodecError::MalformedScalar { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = router().decode("{not json").unwrap_err();
        assert!(matches!(err, RouterError::Codec(CodecError::Json(_))));
    }

    #[test]
    fn test_missing_timestamp_is_epoch() {
        let webhook = router().decode(r#"{"event": "meeting.ended"}"#).unwrap();
        assert_eq!(webhook.timestamp, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            webhook.event,
            WebhookEvent::Meeting(MeetingEvent::Ended(ObjectPayload::default()))
        );
    }

    #[test]
    fn test_timestamp_precision() {
        let body = r#"{"event": "meeting.ended", "event_ts": 1700000000123}"#;

        let millis = router()
            .with_timestamp_precision(TimestampPrecision::Milliseconds)
            .decode(body)
            .unwrap();
        assert_eq!(millis.timestamp.timestamp_millis(), 1_700_000_000_123);

        let seconds = router()
            .decode(r#"{"event": "meeting.ended", "event_ts": 1700000000}"#)
            .unwrap();
        assert_eq!(seconds.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_string_timestamp_is_malformed() {
        let err = router()
            .decode(r#"{"event": "meeting.ended", "event_ts": "yesterday"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            RouterError::Codec(CodecError::MalformedScalar { .. })
        ));
    }

    #[test]
    fn test_payload_error_propagates() {
        let err = router()
            .decode(r#"{"event": "meeting.created", "payload": {"object": {"type": 99}}}"#)
            .unwrap_err();
        assert!(matches!(err, RouterError::Codec(CodecError::Entity { .. })));
    }

    // ---- encode ----

    #[test]
    fn test_encode_prunes_and_round_trips() {
        let envelope = json!({
            "event": "meeting.started",
            "event_ts": 1_700_000_000,
            "payload": {
                "account_id": "acc",
                "object": {"id": 1, "type": 2, "topic": "Sync", "settings": {}}
            }
        });

        let webhook = router().decode_value(envelope).unwrap();
        let encoded = router().encode(&webhook).unwrap();

        assert_eq!(encoded["event"], json!("meeting.started"));
        assert_eq!(encoded["event_ts"], json!(1_700_000_000));
        assert!(encoded["payload"]["object"].get("settings").is_none());

        let reencoded = router()
            .encode(&router().decode_value(encoded.clone()).unwrap())
            .unwrap();
        assert_eq!(reencoded, encoded);
    }

    #[test]
    fn test_encode_unknown_event_without_payload() {
        let webhook = router().decode(r#"{"event": "x.y", "event_ts": 5}"#).unwrap();
        assert_eq!(
            router().encode(&webhook).unwrap(),
            json!({"event": "x.y", "event_ts": 5})
        );
    }

    // ---- challenge ----

    #[test]
    fn test_respond_to_challenge() {
        let body = r#"{"event": "endpoint.url_validation", "event_ts": 1700000000,
            "payload": {"plainToken": "qgg8vlvZRS6UYooatFL8Aw"}}"#;
        let response = router()
            .respond_to_challenge(body, &SecretString::from("test-webhook-secret-do-not-use"))
            .unwrap();

        assert_eq!(response.plain_token, "qgg8vlvZRS6UYooatFL8Aw");
        assert_eq!(
            response.encrypted_token,
            "db39f022d0d1c89f776703f2103d9e5c7ec77fa15c0737127dfe8c57f7d77d1e"
        );
    }

    #[test]
    fn test_challenge_requires_validation_event() {
        let err = router()
            .respond_to_challenge(r#"{"event": "meeting.ended"}"#, &SecretString::from("s"))
            .unwrap_err();
        assert!(matches!(err, RouterError::NotAValidationEvent(ref t) if t == "meeting.ended"));
    }

    #[test]
    fn test_challenge_requires_token() {
        let err = router()
            .respond_to_challenge(
                r#"{"event": "endpoint.url_validation", "payload": {}}"#,
                &SecretString::from("s"),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RouterError::Codec(CodecError::MissingField { .. })
        ));
    }
}
