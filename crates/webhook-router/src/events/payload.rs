//! Payload shapes shared across event families.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, skip_serializing_none};
use wire_codec::models::{Participant, ParticipantFeedback, Registrant};
use wire_codec::scalar::{EpochMillis, LocalTimestamp};

/// The common `{ account_id, operator, object }` payload.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectPayload<T> {
    pub account_id: Option<String>,

    /// Email of the user who triggered the event, when one did.
    pub operator: Option<String>,

    pub operator_id: Option<String>,

    pub object: Option<T>,
}

impl<T> Default for ObjectPayload<T> {
    fn default() -> Self {
        Self {
            account_id: None,
            operator: None,
            operator_id: None,
            object: None,
        }
    }
}

/// Payload of `*.updated` events.
///
/// `object` carries only the changed fields and `old_object` their previous
/// values. Partial objects often lack union discriminators, so they default
/// to untyped maps.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatedPayload<T = Map<String, Value>> {
    pub account_id: Option<String>,

    pub operator: Option<String>,

    pub operator_id: Option<String>,

    pub object: Option<T>,

    pub old_object: Option<T>,

    /// When the change was made.
    #[serde_as(as = "Option<EpochMillis>")]
    pub time_stamp: Option<DateTime<Utc>>,
}

impl<T> Default for UpdatedPayload<T> {
    fn default() -> Self {
        Self {
            account_id: None,
            operator: None,
            operator_id: None,
            object: None,
            old_object: None,
            time_stamp: None,
        }
    }
}

/// An object this crate does not model beyond its envelope.
pub type GenericPayload = ObjectPayload<Map<String, Value>>;

/// A meeting or webinar session as seen by in-session events (joins,
/// registrations, sharing, feedback).
///
/// The session kind is kept as a raw code: these events are raised for every
/// session kind, including ones outside the meeting and webinar unions.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionActivity {
    pub uuid: Option<String>,

    pub id: Option<i64>,

    pub host_id: Option<String>,

    pub topic: Option<String>,

    #[serde(rename = "type")]
    pub session_type: Option<i64>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    pub timezone: Option<String>,

    pub duration: Option<i64>,

    pub participant: Option<Participant>,

    pub registrant: Option<Registrant>,

    pub feedback: Option<ParticipantFeedback>,
}

/// Payload of `endpoint.url_validation`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlValidationPayload {
    pub plain_token: Option<String>,
}

/// Payload of realtime media stream start/stop events.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtmsPayload {
    pub meeting_uuid: Option<String>,

    pub operator_id: Option<String>,

    pub rtms_stream_id: Option<String>,

    pub server_urls: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wire_codec::entity;
    use wire_codec::models::User;

    #[test]
    fn test_object_payload_default_encodes_empty() {
        let payload = ObjectPayload::<User>::default();
        assert_eq!(entity::encode(&payload).unwrap(), json!({}));
    }

    #[test]
    fn test_updated_payload_keeps_partial_objects() {
        let payload: UpdatedPayload = entity::decode(&json!({
            "account_id": "acc",
            "object": {"id": 1, "topic": "New"},
            "old_object": {"id": 1, "topic": "Old"},
            "time_stamp": 1_700_000_000_000_i64
        }))
        .unwrap()
        .unwrap();

        assert_eq!(
            payload.old_object.unwrap().get("topic"),
            Some(&json!("Old"))
        );
        assert_eq!(payload.time_stamp.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_url_validation_token_is_camel_case() {
        let payload: UrlValidationPayload =
            entity::decode(&json!({"plainToken": "abc"})).unwrap().unwrap();
        assert_eq!(payload.plain_token.as_deref(), Some("abc"));
    }
}
