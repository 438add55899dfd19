//! Cloud recordings.

use crate::scalar::LocalTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// The recorded meeting with its files.
///
/// `type` here is the meeting kind and is kept as a raw code: recording
/// payloads include kinds (e.g. webinars) that the meeting union rejects.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingMeeting {
    pub uuid: Option<String>,

    pub id: Option<i64>,

    pub account_id: Option<String>,

    pub host_id: Option<String>,

    pub host_email: Option<String>,

    pub topic: Option<String>,

    #[serde(rename = "type")]
    pub meeting_type: Option<i64>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    pub timezone: Option<String>,

    pub duration: Option<i64>,

    /// Bytes across all files.
    pub total_size: Option<i64>,

    pub recording_count: Option<i64>,

    pub share_url: Option<String>,

    pub password: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recording_files: Vec<RecordingFile>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingFile {
    pub id: Option<String>,

    pub meeting_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub recording_start: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub recording_end: Option<DateTime<Utc>>,

    /// `MP4`, `M4A`, `TRANSCRIPT`, `CHAT`, ...
    pub file_type: Option<String>,

    pub file_extension: Option<String>,

    pub file_size: Option<i64>,

    pub play_url: Option<String>,

    pub download_url: Option<String>,

    pub status: Option<String>,

    /// `shared_screen_with_speaker_view`, `audio_only`, ...
    pub recording_type: Option<String>,
}
