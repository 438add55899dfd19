//! JSON fixture payloads
//!
//! Realistic wire objects in the platform's loose encoding: string and
//! numeric codes mixed, `1`/`0` booleans, delimited strings and key/value
//! arrays.

use crate::test_ids::{
    TEST_HOST_EMAIL, TEST_HOST_ID, TEST_MEETING_ID, TEST_MEETING_UUID, TEST_SECRET_TOKEN,
    TEST_USER_ID, TEST_WEBINAR_ID,
};
use common::secret::SecretString;
use serde_json::{json, Value};
use webhook_router::compute_signature;

/// A scheduled meeting (`type` 2) with settings and tracking fields
pub fn scheduled_meeting() -> Value {
    json!({
        "uuid": TEST_MEETING_UUID,
        "id": TEST_MEETING_ID,
        "host_id": TEST_HOST_ID,
        "host_email": TEST_HOST_EMAIL,
        "topic": "Quarterly planning",
        "type": 2,
        "start_time": "2024-05-01T15:00:00Z",
        "duration": 60,
        "timezone": "America/Los_Angeles",
        "settings": {
            "host_video": 1,
            "join_before_host": false,
            "alternative_hosts": "a@example.com;b@example.com",
            "language_interpretation": {
                "enable": true,
                "interpreters": [
                    {"type": 1, "email": "i@example.com", "languages": "US,FR"},
                    {"type": 2, "email": "s@example.com", "sign_language": "American"}
                ]
            }
        },
        "tracking_fields": [
            {"field": "Department", "value": "Eng"},
            {"value": "orphan"}
        ]
    })
}

/// A recurring meeting with a fixed time (`type` 8) as a numeral string
pub fn recurring_meeting() -> Value {
    json!({
        "uuid": TEST_MEETING_UUID,
        "id": TEST_MEETING_ID,
        "host_id": TEST_HOST_ID,
        "topic": "Weekly sync",
        "type": "8",
        "recurrence": {
            "type": 2,
            "repeat_interval": 1,
            "weekly_days": "2,4",
            "end_date_time": "2024-12-31T00:00:00Z"
        },
        "occurrences": [
            {"occurrence_id": "1714575600000", "start_time": "2024-05-01T15:00:00Z", "duration": 30}
        ]
    })
}

/// A scheduled webinar (`type` 5)
pub fn scheduled_webinar() -> Value {
    json!({
        "uuid": "webinar-uuid",
        "id": TEST_WEBINAR_ID,
        "host_id": TEST_HOST_ID,
        "topic": "Product launch",
        "type": 5,
        "start_time": "2024-06-01T17:00:00Z",
        "duration": 90
    })
}

/// A participant with two devices and tolerant booleans
pub fn participant() -> Value {
    json!({
        "user_id": TEST_USER_ID,
        "user_name": "Ada Lovelace",
        "email": "ada@example.com",
        "join_time": "2024-05-01T15:01:00Z",
        "device": "Mac + Phone",
        "share_desktop": 1,
        "recording": 0
    })
}

/// In-session activity carrying [`participant`]
pub fn participant_activity() -> Value {
    json!({
        "uuid": TEST_MEETING_UUID,
        "id": TEST_MEETING_ID,
        "host_id": TEST_HOST_ID,
        "topic": "Quarterly planning",
        "type": 2,
        "participant": participant()
    })
}

/// A conference hosted event with two days
pub fn conference_event() -> Value {
    json!({
        "event_id": "ev-0001",
        "name": "DevConf",
        "event_type": "CONFERENCE",
        "hub_id": "hub-1",
        "status": "PUBLISHED",
        "days": [
            {"date": "2024-09-10"},
            {"date": "2024-09-11"}
        ]
    })
}

/// Payload of an `endpoint.url_validation` event
pub fn url_validation_payload(plain_token: &str) -> Value {
    json!({"plainToken": plain_token})
}

/// Signature header value for `body` under the fixed test secret
pub fn sign(timestamp: &str, body: &str) -> String {
    compute_signature(
        &SecretString::from(TEST_SECRET_TOKEN),
        timestamp,
        body.as_bytes(),
    )
}
