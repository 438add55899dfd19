//! Registry coverage tests
//!
//! Every registered event type must decode from a minimal envelope, with and
//! without a payload.

use webhook_router::EventRegistry;
use webhook_test_utils::*;

#[test]
fn test_registry_covers_more_than_150_event_types() {
    let registry = EventRegistry::standard().unwrap();
    assert!(
        registry.len() > 150,
        "expected more than 150 event types, found {}",
        registry.len()
    );
}

#[test]
fn test_every_event_type_decodes_from_minimal_envelope() {
    let router = test_router();

    for event_type in router.registry().event_types() {
        let body = EnvelopeBuilder::new(event_type).to_body();
        let webhook = router
            .decode(&body)
            .unwrap_or_else(|e| panic!("{event_type} failed to decode: {e}"));

        webhook
            .assert_event_type(event_type)
            .assert_known()
            .assert_timestamp(TEST_EVENT_TS);
    }
}

#[test]
fn test_every_event_type_decodes_without_payload() {
    let router = test_router();

    for event_type in router.registry().event_types() {
        let envelope = EnvelopeBuilder::new(event_type).without_payload().build();
        let webhook = router
            .decode_value(envelope)
            .unwrap_or_else(|e| panic!("{event_type} failed to decode: {e}"));

        webhook.assert_event_type(event_type).assert_known();
    }
}

#[test]
fn test_every_event_type_round_trips_minimal_envelope() {
    let router = test_router();

    for event_type in router.registry().event_types() {
        let webhook = router
            .decode(&EnvelopeBuilder::new(event_type).to_body())
            .unwrap();
        webhook.assert_round_trips(&router);
    }
}
