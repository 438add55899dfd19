//! Team chat channels and messages.

use crate::scalar::{EpochMillis, IdName, KeyValueList, KeyValuePair, LocalTimestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// A chat message.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub id: Option<String>,

    pub message: Option<String>,

    pub session_id: Option<String>,

    pub contact_email: Option<String>,

    pub contact_id: Option<String>,

    pub channel_id: Option<String>,

    pub channel_name: Option<String>,

    /// Set on thread replies.
    pub reply_main_message_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,

    /// Send time with millisecond precision.
    #[serde_as(as = "Option<EpochMillis>")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ChatFile>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatFile {
    pub file_id: Option<String>,

    pub file_name: Option<String>,

    pub file_size: Option<i64>,
}

/// A chat channel.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatChannel {
    pub id: Option<String>,

    pub name: Option<String>,

    /// 1 private, 2 private with external members, 3 public, 4 new chat.
    #[serde(rename = "type")]
    pub channel_type: Option<i64>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,

    /// Members as `{id, name}` pairs.
    #[serde_as(as = "Option<KeyValueList<IdName>>")]
    pub members: Option<Vec<KeyValuePair>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::entity;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_message_timestamp_is_millis() {
        let message: ChatMessage = entity::decode(&json!({
            "id": "m1",
            "message": "hello",
            "timestamp": 1_700_000_000_123_i64
        }))
        .unwrap()
        .unwrap();

        assert_eq!(
            message.timestamp,
            Some(Utc.timestamp_millis_opt(1_700_000_000_123).unwrap())
        );
    }

    #[test]
    fn test_channel_members() {
        let channel: ChatChannel = entity::decode(&json!({
            "name": "ops",
            "type": 3,
            "members": [{"id": "u1", "name": "Grace"}, {"id": "u2"}]
        }))
        .unwrap()
        .unwrap();

        assert_eq!(
            channel.members,
            Some(vec![KeyValuePair::new("u1", "Grace"), KeyValuePair::new("u2", "")])
        );
    }
}
