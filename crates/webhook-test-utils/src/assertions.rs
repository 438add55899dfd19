//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for decoded webhooks.

use webhook_router::{EventRouter, Webhook, WebhookEvent};

/// Custom assertions for decoded webhooks
///
/// # Example
/// ```rust,ignore
/// webhook
///     .assert_event_type("meeting.started")
///     .assert_known()
///     .assert_timestamp(1_700_000_000);
/// ```
pub trait EventAssertions {
    /// Assert the wire event type
    fn assert_event_type(&self, event_type: &str) -> &Self;

    /// Assert that the event type has a registry entry
    fn assert_known(&self) -> &Self;

    /// Assert that the event was carried as unknown with the given payload
    fn assert_unknown_with_payload(&self, payload: &serde_json::Value) -> &Self;

    /// Assert `event_ts` in epoch seconds
    fn assert_timestamp(&self, epoch_seconds: i64) -> &Self;

    /// Assert that encoding and decoding again yields the same envelope
    fn assert_round_trips(&self, router: &EventRouter<'_>) -> &Self;
}

impl EventAssertions for Webhook {
    fn assert_event_type(&self, event_type: &str) -> &Self {
        assert_eq!(
            self.event_type(),
            event_type,
            "Unexpected event type"
        );
        self
    }

    fn assert_known(&self) -> &Self {
        assert!(
            !self.event.is_unknown(),
            "Event type '{}' was not decoded through the registry",
            self.event_type()
        );
        self
    }

    fn assert_unknown_with_payload(&self, payload: &serde_json::Value) -> &Self {
        match &self.event {
            WebhookEvent::Unknown(unknown) => assert_eq!(
                &unknown.payload, payload,
                "Unknown event payload was modified"
            ),
            other => panic!("Expected an unknown event, got {other:?}"),
        }
        self
    }

    fn assert_timestamp(&self, epoch_seconds: i64) -> &Self {
        assert_eq!(
            self.timestamp.timestamp(),
            epoch_seconds,
            "Unexpected event_ts"
        );
        self
    }

    fn assert_round_trips(&self, router: &EventRouter<'_>) -> &Self {
        let encoded = router.encode(self).expect("Failed to encode webhook");
        let decoded = router
            .decode_value(encoded.clone())
            .expect("Failed to decode re-encoded webhook");
        let reencoded = router.encode(&decoded).expect("Failed to re-encode webhook");

        assert_eq!(
            reencoded, encoded,
            "Envelope changed across an encode/decode round trip"
        );
        self
    }
}
