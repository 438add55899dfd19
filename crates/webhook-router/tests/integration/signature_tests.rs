//! Signed delivery tests

use chrono::{DateTime, Utc};
use webhook_router::events::MeetingEvent;
use webhook_router::{RouterError, WebhookEvent};
use webhook_test_utils::*;

fn signed_at() -> DateTime<Utc> {
    DateTime::from_timestamp(TEST_SIGNED_TIMESTAMP.parse().unwrap(), 0).unwrap()
}

#[test]
fn test_verify_and_decode_pinned_delivery() {
    let webhook = test_router()
        .verify_and_decode_at(
            TEST_SIGNED_BODY.as_bytes(),
            TEST_SIGNED_TIMESTAMP,
            TEST_SIGNATURE,
            &test_secret(),
            signed_at(),
        )
        .unwrap();

    assert!(matches!(
        webhook.event,
        WebhookEvent::Meeting(MeetingEvent::Started(_))
    ));
}

#[test]
fn test_tampered_body_is_rejected_before_decoding() {
    let err = test_router()
        .verify_and_decode_at(
            br#"{"event":"meeting.ended"}"#,
            TEST_SIGNED_TIMESTAMP,
            TEST_SIGNATURE,
            &test_secret(),
            signed_at(),
        )
        .unwrap_err();

    assert!(matches!(err, RouterError::InvalidSignature));
}

#[test]
fn test_invalid_json_with_bad_signature_reports_signature() {
    let err = test_router()
        .verify_and_decode_at(
            b"not json",
            TEST_SIGNED_TIMESTAMP,
            TEST_SIGNATURE,
            &test_secret(),
            signed_at(),
        )
        .unwrap_err();

    assert!(matches!(err, RouterError::InvalidSignature));
}

#[test]
fn test_stale_delivery_is_rejected() {
    let later = signed_at() + chrono::Duration::seconds(301);
    let err = test_router()
        .verify_and_decode_at(
            TEST_SIGNED_BODY.as_bytes(),
            TEST_SIGNED_TIMESTAMP,
            TEST_SIGNATURE,
            &test_secret(),
            later,
        )
        .unwrap_err();

    assert!(matches!(err, RouterError::StaleTimestamp(_)));
}

#[test]
fn test_configured_window_accepts_older_delivery() {
    let later = signed_at() + chrono::Duration::seconds(600);
    test_router()
        .with_max_signature_age(900)
        .verify_and_decode_at(
            TEST_SIGNED_BODY.as_bytes(),
            TEST_SIGNED_TIMESTAMP,
            TEST_SIGNATURE,
            &test_secret(),
            later,
        )
        .unwrap();
}

#[test]
fn test_fixture_signatures_verify() {
    let body = EnvelopeBuilder::new("user.created").to_body();
    let signature = fixtures::sign(TEST_SIGNED_TIMESTAMP, &body);

    test_router()
        .verify_and_decode_at(
            body.as_bytes(),
            TEST_SIGNED_TIMESTAMP,
            &signature,
            &test_secret(),
            signed_at(),
        )
        .unwrap()
        .assert_event_type("user.created");
}
