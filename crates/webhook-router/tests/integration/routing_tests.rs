//! End-to-end routing tests over realistic payloads

use common::config::TimestampPrecision;
use serde_json::json;
use webhook_router::events::{HostedEventNotification, MeetingEvent, WebinarEvent};
use webhook_router::{RouterError, WebhookEvent};
use webhook_test_utils::*;
use wire_codec::models::{HostedEvent, Interpreter, Meeting, ParticipantDevice, Webinar};
use wire_codec::scalar::KeyValuePair;
use wire_codec::CodecError;

// ============================================================================
// Meetings
// ============================================================================

#[test]
fn test_meeting_created_decodes_nested_unions() {
    let body = EnvelopeBuilder::new("meeting.created")
        .with_payload_field("operator", json!(TEST_OPERATOR))
        .with_object(fixtures::scheduled_meeting())
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    webhook.assert_event_type("meeting.created").assert_known();

    let WebhookEvent::Meeting(MeetingEvent::Created(payload)) = &webhook.event else {
        panic!("expected meeting.created, got {:?}", webhook.event);
    };
    assert_eq!(payload.account_id.as_deref(), Some(TEST_ACCOUNT_ID));
    assert_eq!(payload.operator.as_deref(), Some(TEST_OPERATOR));

    let Some(Meeting::Scheduled(meeting)) = &payload.object else {
        panic!("type 2 must decode as a scheduled meeting");
    };
    assert_eq!(meeting.base.id, Some(TEST_MEETING_ID));
    assert_eq!(
        meeting.base.tracking_fields,
        Some(vec![KeyValuePair::new("Department", "Eng")])
    );

    let settings = meeting.base.settings.as_ref().unwrap();
    assert_eq!(settings.host_video, Some(true));
    assert_eq!(settings.alternative_hosts, vec!["a@example.com", "b@example.com"]);

    let interpreters = &settings.language_interpretation.as_ref().unwrap().interpreters;
    assert!(matches!(interpreters[0], Interpreter::Language(_)));
    assert!(matches!(interpreters[1], Interpreter::SignLanguage(_)));
}

#[test]
fn test_meeting_round_trips() {
    let router = test_router();
    let body = EnvelopeBuilder::new("meeting.started")
        .with_object(fixtures::recurring_meeting())
        .to_body();

    let webhook = router.decode(&body).unwrap();
    let WebhookEvent::Meeting(MeetingEvent::Started(payload)) = &webhook.event else {
        panic!("expected meeting.started");
    };
    assert!(matches!(payload.object, Some(Meeting::Recurring(_))));

    webhook.assert_round_trips(&router);
}

#[test]
fn test_participant_joined() {
    let body = EnvelopeBuilder::new("meeting.participant_joined")
        .with_object(fixtures::participant_activity())
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    let WebhookEvent::Meeting(MeetingEvent::ParticipantJoined(payload)) = webhook.event else {
        panic!("expected meeting.participant_joined");
    };

    let participant = payload.object.unwrap().participant.unwrap();
    assert_eq!(participant.user_id.as_deref(), Some(TEST_USER_ID));
    assert_eq!(
        participant.device,
        vec![ParticipantDevice::Mac, ParticipantDevice::Phone]
    );
    assert_eq!(participant.share_desktop, Some(true));
    assert_eq!(participant.recording, Some(false));
}

#[test]
fn test_unmapped_meeting_type_is_hard_failure() {
    let body = EnvelopeBuilder::new("meeting.created")
        .with_object(json!({"id": 1, "type": 7}))
        .to_body();

    let err = test_router().decode(&body).unwrap_err();
    assert!(
        err.to_string().contains("unknown discriminator 7"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_updated_meeting_keeps_partial_objects() {
    let body = EnvelopeBuilder::new("meeting.updated")
        .with_object(json!({"id": TEST_MEETING_ID, "topic": "Renamed"}))
        .with_old_object(json!({"id": TEST_MEETING_ID, "topic": "Quarterly planning"}))
        .with_payload_field("time_stamp", json!(TEST_EVENT_TS_MILLIS))
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    let WebhookEvent::Meeting(MeetingEvent::Updated(payload)) = webhook.event else {
        panic!("expected meeting.updated");
    };
    assert_eq!(payload.object.unwrap()["topic"], "Renamed");
    assert_eq!(
        payload.time_stamp.unwrap().timestamp_millis(),
        TEST_EVENT_TS_MILLIS
    );
}

// ============================================================================
// Webinars and hosted events
// ============================================================================

#[test]
fn test_webinar_started() {
    let body = EnvelopeBuilder::new("webinar.started")
        .with_object(fixtures::scheduled_webinar())
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    let WebhookEvent::Webinar(WebinarEvent::Started(payload)) = webhook.event else {
        panic!("expected webinar.started");
    };
    assert!(matches!(payload.object, Some(Webinar::Scheduled(_))));
}

#[test]
fn test_hosted_event_published() {
    let body = EnvelopeBuilder::new("zoom_events.event_published")
        .with_object(fixtures::conference_event())
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    let WebhookEvent::HostedEvent(HostedEventNotification::Published(payload)) = webhook.event
    else {
        panic!("expected zoom_events.event_published");
    };
    let Some(HostedEvent::Conference(conference)) = payload.object else {
        panic!("CONFERENCE must decode as a conference event");
    };
    assert_eq!(conference.days.len(), 2);
}

// ============================================================================
// Envelope handling
// ============================================================================

#[test]
fn test_unknown_event_type_is_soft() {
    let payload = json!({"account_id": "acc", "object": {"new_field": [1, {"a": null}]}});
    let body = EnvelopeBuilder::new("meeting.holographic_mode_enabled")
        .with_payload(payload.clone())
        .to_body();

    let webhook = test_router().decode(&body).unwrap();
    webhook
        .assert_event_type("meeting.holographic_mode_enabled")
        .assert_unknown_with_payload(&payload)
        .assert_round_trips(&test_router());
}

#[test]
fn test_missing_event_field_is_hard() {
    let body = EnvelopeBuilder::new("ignored")
        .build()
        .as_object()
        .map(|envelope| {
            let mut envelope = envelope.clone();
            envelope.remove("event");
            serde_json::Value::Object(envelope)
        })
        .unwrap();

    let err = test_router().decode_value(body).unwrap_err();
    assert!(matches!(
        err,
        RouterError::Codec(CodecError::MissingField { .. })
    ));
}

#[test]
fn test_non_string_event_field_is_hard() {
    let envelope = EnvelopeBuilder::new("ignored")
        .with_raw_event(json!(["meeting.started"]))
        .build();

    let err = test_router().decode_value(envelope).unwrap_err();
    assert!(matches!(
        err,
        RouterError::Codec(CodecError::MalformedScalar { .. })
    ));
}

#[test]
fn test_missing_timestamp_defaults_to_epoch() {
    let webhook = test_router()
        .decode(&EnvelopeBuilder::new("user.signed_in").without_timestamp().to_body())
        .unwrap();

    webhook.assert_known().assert_timestamp(0);
}

#[test]
fn test_millisecond_precision() {
    let router = test_router().with_timestamp_precision(TimestampPrecision::Milliseconds);
    let webhook = router
        .decode(&EnvelopeBuilder::new("user.signed_in").at(TEST_EVENT_TS_MILLIS).to_body())
        .unwrap();

    assert_eq!(webhook.timestamp.timestamp_millis(), TEST_EVENT_TS_MILLIS);
    assert_eq!(router.encode(&webhook).unwrap()["event_ts"], TEST_EVENT_TS_MILLIS);
}

#[test]
fn test_decode_slice_matches_decode() {
    let body = EnvelopeBuilder::new("recording.completed")
        .with_object(json!({"uuid": "r1", "recording_files": [{"id": "f1"}]}))
        .to_body();

    let router = test_router();
    assert_eq!(
        router.decode_slice(body.as_bytes()).unwrap(),
        router.decode(&body).unwrap()
    );
}
