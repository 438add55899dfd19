//! Users and presence.

use crate::scalar::{KeyValue, KeyValueList, KeyValuePair, LocalTimestamp, TolerantBool};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// A user of an account.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<String>,

    pub account_id: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub display_name: Option<String>,

    pub email: Option<String>,

    /// 1 basic, 2 licensed, 4 unassigned without meetings basic, 99 none.
    #[serde(rename = "type")]
    pub user_type: Option<i64>,

    pub role_id: Option<String>,

    pub role_name: Option<String>,

    pub pmi: Option<i64>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub use_pmi: Option<bool>,

    pub personal_meeting_url: Option<String>,

    pub timezone: Option<String>,

    pub language: Option<String>,

    /// Sent as `1`/`0`.
    #[serde_as(as = "Option<TolerantBool>")]
    pub verified: Option<bool>,

    pub dept: Option<String>,

    pub employee_unique_id: Option<String>,

    pub phone_number: Option<String>,

    pub pic_url: Option<String>,

    pub status: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub last_login_time: Option<DateTime<Utc>>,

    pub last_client_version: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,

    /// Admin-defined attributes as `{key, value}` pairs.
    #[serde_as(as = "Option<KeyValueList<KeyValue>>")]
    pub custom_attributes: Option<Vec<KeyValuePair>>,
}

/// A presence change.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceStatus {
    pub id: Option<String>,

    pub email: Option<String>,

    /// `Available`, `Away`, `Do_Not_Disturb`, `In_Meeting`, ...
    pub presence_status: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::entity;
    use serde_json::json;

    #[test]
    fn test_decode_user() {
        let user: User = entity::decode(&json!({
            "id": "KDcuGIm1QgePTO8WbOqwIQ",
            "type": 2,
            "verified": 1,
            "use_pmi": false,
            "custom_attributes": [{"key": "cost_center", "value": "R&D"}, {"key": ""}]
        }))
        .unwrap()
        .unwrap();

        assert_eq!(user.user_type, Some(2));
        assert_eq!(user.verified, Some(true));
        assert_eq!(user.use_pmi, Some(false));
        assert_eq!(
            user.custom_attributes,
            Some(vec![KeyValuePair::new("cost_center", "R&D")])
        );
    }
}
