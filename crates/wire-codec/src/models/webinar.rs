//! Webinars.
//!
//! `type` 5 is a one-off webinar, 6 a recurring webinar with no fixed time
//! and 9 a recurring webinar with a fixed time.

use super::meeting::{LanguageInterpretation, Occurrence, Recurrence};
use crate::scalar::{Comma, Delimited, LocalTimestamp, TolerantBool};
use crate::union::{variant, Discriminant, DiscriminatorRule, UnmappedPolicy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

wire_code_enum! {
    /// Webinar kind code.
    pub enum WebinarType {
        Scheduled = 5,
        RecurringNoFixedTime = 6,
        RecurringFixedTime = 9,
    }
}

/// Fields shared by every webinar shape.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebinarBase {
    pub uuid: Option<String>,

    pub id: Option<i64>,

    pub host_id: Option<String>,

    pub host_email: Option<String>,

    pub topic: Option<String>,

    #[serde(rename = "type")]
    pub webinar_type: Option<WebinarType>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    pub duration: Option<i64>,

    pub timezone: Option<String>,

    pub agenda: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub created_at: Option<DateTime<Utc>>,

    pub join_url: Option<String>,

    pub password: Option<String>,

    pub settings: Option<WebinarSettings>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledWebinar {
    #[serde(flatten)]
    pub base: WebinarBase,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringWebinarNoFixedTime {
    #[serde(flatten)]
    pub base: WebinarBase,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringWebinarFixedTime {
    #[serde(flatten)]
    pub base: WebinarBase,

    pub recurrence: Option<Recurrence>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
}

/// A webinar resolved by its `type` code.
#[derive(Debug, Clone, PartialEq)]
pub enum Webinar {
    Scheduled(ScheduledWebinar),
    RecurringNoFixedTime(RecurringWebinarNoFixedTime),
    RecurringFixedTime(RecurringWebinarFixedTime),
}

impl Webinar {
    /// Fields shared by every shape.
    #[must_use]
    pub fn base(&self) -> &WebinarBase {
        match self {
            Webinar::Scheduled(w) => &w.base,
            Webinar::RecurringNoFixedTime(w) => &w.base,
            Webinar::RecurringFixedTime(w) => &w.base,
        }
    }
}

/// Resolution table for [`Webinar`].
pub static WEBINAR_RULE: DiscriminatorRule<Webinar> = DiscriminatorRule {
    union: "Webinar",
    path: &["type"],
    variants: &[
        (Discriminant::Code(5), |doc| variant(doc, Webinar::Scheduled)),
        (Discriminant::Code(6), |doc| {
            variant(doc, Webinar::RecurringNoFixedTime)
        }),
        (Discriminant::Code(9), |doc| variant(doc, Webinar::RecurringFixedTime)),
    ],
    unmapped: UnmappedPolicy::Fail,
};

union_serde!(
    Webinar,
    WEBINAR_RULE,
    [Scheduled, RecurringNoFixedTime, RecurringFixedTime]
);

/// Webinar settings.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebinarSettings {
    #[serde_as(as = "Option<TolerantBool>")]
    pub host_video: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub panelists_video: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub practice_session: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub hd_video: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub on_demand: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub allow_multiple_devices: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub registrants_email_notification: Option<bool>,

    #[serde_as(as = "Option<TolerantBool>")]
    pub close_registration: Option<bool>,

    /// 0 automatic, 1 manual, 2 no registration required.
    pub approval_type: Option<i64>,

    pub registration_type: Option<i64>,

    pub audio: Option<String>,

    pub auto_recording: Option<String>,

    /// `,`-joined alternative host emails.
    #[serde_as(as = "Delimited<Comma>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_hosts: Vec<String>,

    pub language_interpretation: Option<LanguageInterpretation>,
}
