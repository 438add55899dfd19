//! Cloud phone calls, voicemail and phone users.

use crate::scalar::LocalTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// One side of a call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallParty {
    pub user_id: Option<String>,

    pub extension_number: Option<i64>,

    pub phone_number: Option<String>,

    pub name: Option<String>,

    pub timezone: Option<String>,

    /// `user`, `callQueue`, `autoReceptionist`, `pstn`, ...
    pub extension_type: Option<String>,

    pub device_type: Option<String>,

    pub connection_type: Option<String>,
}

/// Call lifecycle and call log entries.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallLog {
    pub id: Option<String>,

    pub call_id: Option<String>,

    pub caller: Option<CallParty>,

    pub callee: Option<CallParty>,

    /// `inbound` or `outbound`.
    pub direction: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub ringing_start_time: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub answer_start_time: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub call_end_time: Option<DateTime<Utc>>,

    /// Seconds.
    pub duration: Option<i64>,

    pub result: Option<String>,

    pub handup_result: Option<String>,

    pub recording_id: Option<String>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voicemail {
    pub id: Option<String>,

    pub call_id: Option<String>,

    pub caller_name: Option<String>,

    pub caller_number: Option<String>,

    pub callee_name: Option<String>,

    pub callee_number: Option<String>,

    pub callee_user_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,

    pub duration: Option<i64>,

    pub download_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneUser {
    pub id: Option<String>,

    pub email: Option<String>,

    pub name: Option<String>,

    pub extension_number: Option<i64>,

    pub site_id: Option<String>,

    pub status: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<String>,
}
