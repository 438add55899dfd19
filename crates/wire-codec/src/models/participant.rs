//! Meeting and webinar participants.

use crate::scalar::{
    Flag, FlagSet, IdName, KeyValueList, KeyValuePair, LocalTimestamp, TitleAnswer, TolerantBool,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// Client platform a participant joined from.
///
/// Sent as a `" + "`-joined sequence when one participant used several
/// devices, e.g. `"Windows + Phone"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantDevice {
    Windows,
    Mac,
    Linux,
    Ios,
    Android,
    Phone,
    H323Sip,
    Web,
    ZoomRooms,
    Unknown,
}

impl Flag for ParticipantDevice {
    fn from_wire(token: &str) -> Option<Self> {
        let device = match token {
            "Windows" => ParticipantDevice::Windows,
            "Mac" => ParticipantDevice::Mac,
            "Linux" => ParticipantDevice::Linux,
            "iOS" => ParticipantDevice::Ios,
            "Android" => ParticipantDevice::Android,
            "Phone" => ParticipantDevice::Phone,
            "H.323/SIP" => ParticipantDevice::H323Sip,
            "Web" => ParticipantDevice::Web,
            "Zoom Rooms" => ParticipantDevice::ZoomRooms,
            "Unknown" => ParticipantDevice::Unknown,
            _ => return None,
        };
        Some(device)
    }

    fn as_wire(&self) -> &'static str {
        match self {
            ParticipantDevice::Windows => "Windows",
            ParticipantDevice::Mac => "Mac",
            ParticipantDevice::Linux => "Linux",
            ParticipantDevice::Ios => "iOS",
            ParticipantDevice::Android => "Android",
            ParticipantDevice::Phone => "Phone",
            ParticipantDevice::H323Sip => "H.323/SIP",
            ParticipantDevice::Web => "Web",
            ParticipantDevice::ZoomRooms => "Zoom Rooms",
            ParticipantDevice::Unknown => "Unknown",
        }
    }
}

/// A participant as reported by join/leave events and QoS reports.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    /// Per-session participant identifier.
    pub id: Option<String>,

    pub user_id: Option<String>,

    /// Stable identifier across sessions, empty for guests.
    pub participant_user_id: Option<String>,

    pub participant_uuid: Option<String>,

    pub user_name: Option<String>,

    pub email: Option<String>,

    pub registrant_id: Option<String>,

    pub customer_key: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub join_time: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub leave_time: Option<DateTime<Utc>>,

    pub leave_reason: Option<String>,

    /// Seconds in the meeting.
    pub duration: Option<i64>,

    #[serde_as(as = "FlagSet<ParticipantDevice>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device: Vec<ParticipantDevice>,

    pub ip_address: Option<String>,

    pub location: Option<String>,

    pub network_type: Option<String>,

    pub data_center: Option<String>,

    pub connection_type: Option<String>,

    pub version: Option<String>,

    pub pc_name: Option<String>,

    pub domain: Option<String>,

    pub microphone: Option<String>,

    pub speaker: Option<String>,

    pub camera: Option<String>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub share_application: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub share_desktop: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub share_whiteboard: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub recording: Option<bool>,

    /// `in_meeting` or `in_waiting_room`.
    pub status: Option<String>,
}

/// Post-meeting feedback from one participant.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantFeedback {
    pub participant_id: Option<String>,

    pub participant_name: Option<String>,

    pub email: Option<String>,

    /// `GOOD` or `NOT GOOD`.
    pub quality: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,

    /// Reported issues as `{id, name}` pairs.
    #[serde_as(as = "Option<KeyValueList<IdName>>")]
    pub feedback_details: Option<Vec<KeyValuePair>>,

    pub comment: Option<String>,
}

/// Survey answers submitted by one participant.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyResponse {
    pub email: Option<String>,

    pub participant_name: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<KeyValueList<TitleAnswer>>")]
    pub answers: Option<Vec<KeyValuePair>>,
}
