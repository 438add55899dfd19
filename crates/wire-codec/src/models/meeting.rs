//! Meetings.
//!
//! `type` selects the concrete shape:
//!
//! | Code | Type |
//! |---|---|
//! | 1, 4 | [`InstantMeeting`] (4 is a personal meeting ID meeting) |
//! | 2 | [`ScheduledMeeting`] |
//! | 3, 8 | [`RecurringMeeting`] (no fixed time / fixed time) |

use super::interpreter::Interpreter;
use crate::scalar::{
    Comma, DayOfWeek, Delimited, FieldValue, KeyValueList, KeyValuePair, LocalTimestamp,
    Semicolon, TolerantBool, WeekdayList,
};
use crate::union::{variant, Discriminant, DiscriminatorRule, UnmappedPolicy};
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

wire_code_enum! {
    /// Meeting kind code.
    pub enum MeetingType {
        /// Started immediately.
        Instant = 1,
        /// Scheduled for a fixed time.
        Scheduled = 2,
        /// Recurring with no fixed time.
        RecurringNoFixedTime = 3,
        /// Held in the host's personal meeting room.
        PersonalMeetingId = 4,
        /// Recurring with a fixed time.
        RecurringFixedTime = 8,
    }
}

wire_code_enum! {
    /// Recurrence frequency code.
    pub enum RecurrenceType {
        /// Every `repeat_interval` days.
        Daily = 1,
        /// On `weekly_days`.
        Weekly = 2,
        /// On `monthly_day`, or on `monthly_week`/`monthly_week_day`.
        Monthly = 3,
    }
}

/// Fields shared by every meeting shape.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingBase {
    /// Unique instance identifier; changes for every occurrence.
    pub uuid: Option<String>,

    /// Meeting number.
    pub id: Option<i64>,

    pub host_id: Option<String>,

    pub host_email: Option<String>,

    pub topic: Option<String>,

    /// Discriminator; kept so the code survives a round trip.
    #[serde(rename = "type")]
    pub meeting_type: Option<MeetingType>,

    pub status: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    /// Scheduled duration in minutes.
    pub duration: Option<i64>,

    pub timezone: Option<String>,

    pub agenda: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub created_at: Option<DateTime<Utc>>,

    pub join_url: Option<String>,

    pub password: Option<String>,

    pub settings: Option<MeetingSettings>,

    #[serde_as(as = "Option<KeyValueList<FieldValue>>")]
    pub tracking_fields: Option<Vec<KeyValuePair>>,
}

/// Meeting started on demand or in a personal meeting room.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstantMeeting {
    #[serde(flatten)]
    pub base: MeetingBase,
}

/// Meeting scheduled for one fixed time.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledMeeting {
    #[serde(flatten)]
    pub base: MeetingBase,

    /// Created through the pre-schedule flow.
    pub pre_schedule: Option<bool>,
}

/// Recurring meeting, with or without a fixed time.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringMeeting {
    #[serde(flatten)]
    pub base: MeetingBase,

    /// Absent for recurring meetings with no fixed time.
    pub recurrence: Option<Recurrence>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
}

/// A meeting resolved by its `type` code.
#[derive(Debug, Clone, PartialEq)]
pub enum Meeting {
    Instant(InstantMeeting),
    Scheduled(ScheduledMeeting),
    Recurring(RecurringMeeting),
}

impl Meeting {
    /// Fields shared by every shape.
    #[must_use]
    pub fn base(&self) -> &MeetingBase {
        match self {
            Meeting::Instant(m) => &m.base,
            Meeting::Scheduled(m) => &m.base,
            Meeting::Recurring(m) => &m.base,
        }
    }
}

/// Resolution table for [`Meeting`].
pub static MEETING_RULE: DiscriminatorRule<Meeting> = DiscriminatorRule {
    union: "Meeting",
    path: &["type"],
    variants: &[
        (Discriminant::Code(1), |doc| variant(doc, Meeting::Instant)),
        (Discriminant::Code(4), |doc| variant(doc, Meeting::Instant)),
        (Discriminant::Code(2), |doc| variant(doc, Meeting::Scheduled)),
        (Discriminant::Code(3), |doc| variant(doc, Meeting::Recurring)),
        (Discriminant::Code(8), |doc| variant(doc, Meeting::Recurring)),
    ],
    unmapped: UnmappedPolicy::Fail,
};

union_serde!(Meeting, MEETING_RULE, [Instant, Scheduled, Recurring]);

/// Recurrence pattern of a recurring meeting or webinar.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub recurrence_type: Option<RecurrenceType>,

    pub repeat_interval: Option<i64>,

    /// Days of a weekly recurrence, sent as `"1,3,5"`.
    #[serde_as(as = "WeekdayList")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weekly_days: Vec<Weekday>,

    /// Day of the month, 1 to 31.
    pub monthly_day: Option<i64>,

    /// Week of the month: -1 (last) or 1 to 4.
    pub monthly_week: Option<i64>,

    #[serde_as(as = "Option<DayOfWeek>")]
    pub monthly_week_day: Option<Weekday>,

    pub end_times: Option<i64>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub end_date_time: Option<DateTime<Utc>>,
}

/// One occurrence of a recurring meeting or webinar.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Occurrence {
    pub occurrence_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    pub duration: Option<i64>,

    pub status: Option<String>,
}

/// Meeting settings.
///
/// Boolean switches arrive as JSON booleans or as `1`/`0`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
    #[serde_as(as = "Option<TolerantBool>")]
    pub host_video: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub participant_video: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub join_before_host: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub mute_upon_entry: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub waiting_room: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub watermark: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub use_pmi: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub enforce_login: Option<bool>,

    /// `both`, `telephony` or `voip`.
    pub audio: Option<String>,

    /// `local`, `cloud` or `none`.
    pub auto_recording: Option<String>,

    pub approval_type: Option<i64>,

    /// Alternative host emails, sent as a `;`-joined string.
    #[serde_as(as = "Delimited<Semicolon>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_hosts: Vec<String>,

    /// Domains allowed to join when login is enforced, `,`-joined.
    #[serde_as(as = "Delimited<Comma>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enforce_login_domains: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_dial_in_countries: Vec<String>,

    pub language_interpretation: Option<LanguageInterpretation>,
}

/// Interpretation settings shared by meetings and webinars.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageInterpretation {
    #[serde_as(as = "Option<TolerantBool>")]
    pub enable: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interpreters: Vec<Interpreter>,
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::entity;
    use crate::error::CodecError;
    use crate::models::{InterpreterType, SignLanguageInterpreter};
    use crate::RawDocument;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_decode_scheduled_meeting() {
        let meeting: Meeting = serde_json::from_value(json!({
            "uuid": "4444AAAiAAAAAiAiAiiAii==",
            "id": 85_746_065_432_i64,
            "type": 2,
            "topic": "Quarterly review",
            "start_time": "2024-03-01T09:30:00Z",
            "duration": 60,
            "pre_schedule": false,
            "settings": {
                "host_video": 1,
                "waiting_room": 0,
                "alternative_hosts": "a@example.com;b@example.com"
            }
        }))
        .unwrap();

        let Meeting::Scheduled(scheduled) = meeting else {
            panic!("expected scheduled meeting, got {meeting:?}");
        };
        assert_eq!(scheduled.base.id, Some(85_746_065_432));
        assert_eq!(scheduled.base.meeting_type, Some(MeetingType::Scheduled));
        assert_eq!(
            scheduled.base.start_time,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
        );
        let settings = scheduled.base.settings.unwrap();
        assert_eq!(settings.host_video, Some(true));
        assert_eq!(settings.waiting_room, Some(false));
        assert_eq!(settings.alternative_hosts, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_decode_recurring_meeting_with_recurrence() {
        let doc = RawDocument::from_value(json!({
            "type": 8,
            "recurrence": {"type": 2, "repeat_interval": 1, "weekly_days": "2,4"},
            "occurrences": [{"occurrence_id": "1711958400000", "status": "available"}]
        }));

        let Meeting::Recurring(recurring) = Meeting::decode(&doc).unwrap() else {
            panic!("expected recurring meeting");
        };
        let recurrence = recurring.recurrence.unwrap();
        assert_eq!(recurrence.recurrence_type, Some(RecurrenceType::Weekly));
        assert_eq!(recurrence.weekly_days, vec![Weekday::Mon, Weekday::Wed]);
        assert_eq!(recurring.occurrences.len(), 1);
    }

    #[test]
    fn test_nested_interpreter_union() {
        let meeting: Meeting = serde_json::from_value(json!({
            "type": 1,
            "settings": {
                "language_interpretation": {
                    "enable": true,
                    "interpreters": [
                        {"type": 1, "email": "fr@example.com", "languages": "US,FR"},
                        {"type": 2, "email": "asl@example.com", "sign_language": "American"}
                    ]
                }
            }
        }))
        .unwrap();

        let interpretation = meeting
            .base()
            .settings
            .clone()
            .unwrap()
            .language_interpretation
            .unwrap();
        assert_eq!(interpretation.interpreters.len(), 2);
        assert_eq!(
            interpretation.interpreters[1],
            Interpreter::SignLanguage(SignLanguageInterpreter {
                interpreter_type: Some(InterpreterType::SignLanguage),
                email: Some("asl@example.com".to_string()),
                sign_language: Some("American".to_string()),
            })
        );
    }

    #[test]
    fn test_nested_interpreter_with_unknown_code_fails_whole_meeting() {
        let err = serde_json::from_value::<Meeting>(json!({
            "type": 1,
            "settings": {"language_interpretation": {"interpreters": [{"type": 5}]}}
        }))
        .unwrap_err();

        assert!(err.to_string().contains("Interpreter"));
    }

    #[test]
    fn test_tracking_fields_drop_malformed_entries() {
        let meeting: Meeting = serde_json::from_value(json!({
            "type": 2,
            "tracking_fields": [{"field": "Cost center", "value": "42"}, {"value": "orphan"}]
        }))
        .unwrap();

        assert_eq!(
            meeting.base().tracking_fields,
            Some(vec![KeyValuePair::new("Cost center", "42")])
        );
    }

    #[test]
    fn test_encode_round_trips_discriminator() {
        let meeting = Meeting::Recurring(RecurringMeeting {
            base: MeetingBase {
                meeting_type: Some(MeetingType::RecurringFixedTime),
                topic: Some("Standup".to_string()),
                ..MeetingBase::default()
            },
            recurrence: Some(Recurrence {
                recurrence_type: Some(RecurrenceType::Daily),
                monthly_week_day: Some(Weekday::Sun),
                ..Recurrence::default()
            }),
            occurrences: Vec::new(),
        });

        let encoded = entity::encode(&meeting).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": 8,
                "topic": "Standup",
                "recurrence": {"type": 1, "monthly_week_day": 1}
            })
        );

        let decoded: Meeting = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, meeting);
    }

    #[test]
    fn test_empty_settings_are_pruned() {
        let meeting = Meeting::Instant(InstantMeeting {
            base: MeetingBase {
                meeting_type: Some(MeetingType::Instant),
                settings: Some(MeetingSettings::default()),
                ..MeetingBase::default()
            },
        });

        assert_eq!(entity::encode(&meeting).unwrap(), json!({"type": 1}));
    }

    #[test]
    fn test_unknown_meeting_code_names_value() {
        let err = Meeting::decode(&RawDocument::from_value(json!({"type": 99}))).unwrap_err();
        assert!(matches!(err, CodecError::UnknownDiscriminator { .. }));
        assert!(err.to_string().contains("99"));
    }
}
