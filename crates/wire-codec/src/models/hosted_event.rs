//! Hosted events (multi-session event hub listings).
//!
//! Unlike meetings and webinars, the discriminator is a free-form string in
//! `event_type`.

use crate::scalar::{DateOnly, LocalTimestamp};
use crate::union::{variant, Discriminant, DiscriminatorRule, UnmappedPolicy};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// Hosted event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostedEventType {
    SimpleEvent,
    Conference,
    Recurring,
}

/// Fields shared by every hosted event shape.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedEventBase {
    pub event_id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    pub event_type: Option<HostedEventType>,

    pub hub_id: Option<String>,

    pub timezone: Option<String>,

    /// `DRAFT`, `PUBLISHED`, `CANCELLED` or `ENDED`.
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A single-session event.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEvent {
    #[serde(flatten)]
    pub base: HostedEventBase,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A multi-day conference.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceEvent {
    #[serde(flatten)]
    pub base: HostedEventBase,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<EventDay>,
}

/// One day of a conference; times are local to the event timezone.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDay {
    #[serde_as(as = "Option<DateOnly>")]
    pub date: Option<NaiveDate>,

    /// `HH:mm`.
    pub start_time: Option<String>,

    /// `HH:mm`.
    pub end_time: Option<String>,
}

/// A series repeating on a schedule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringEvent {
    #[serde(flatten)]
    pub base: HostedEventBase,

    pub recurrence: Option<EventRecurrence>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecurrence {
    /// `DAILY`, `WEEKLY` or `MONTHLY`.
    pub frequency: Option<String>,

    pub interval: Option<i64>,

    #[serde_as(as = "Option<DateOnly>")]
    pub end_date: Option<NaiveDate>,
}

/// A hosted event resolved by its `event_type` string.
#[derive(Debug, Clone, PartialEq)]
pub enum HostedEvent {
    Simple(SimpleEvent),
    Conference(ConferenceEvent),
    Recurring(RecurringEvent),
}

impl HostedEvent {
    #[must_use]
    pub fn base(&self) -> &HostedEventBase {
        match self {
            HostedEvent::Simple(e) => &e.base,
            HostedEvent::Conference(e) => &e.base,
            HostedEvent::Recurring(e) => &e.base,
        }
    }
}

/// Resolution table for [`HostedEvent`].
pub static HOSTED_EVENT_RULE: DiscriminatorRule<HostedEvent> = DiscriminatorRule {
    union: "HostedEvent",
    path: &["event_type"],
    variants: &[
        (Discriminant::Name("SIMPLE_EVENT"), |doc| {
            variant(doc, HostedEvent::Simple)
        }),
        (Discriminant::Name("CONFERENCE"), |doc| {
            variant(doc, HostedEvent::Conference)
        }),
        (Discriminant::Name("RECURRING"), |doc| {
            variant(doc, HostedEvent::Recurring)
        }),
    ],
    unmapped: UnmappedPolicy::Fail,
};

union_serde!(HostedEvent, HOSTED_EVENT_RULE, [Simple, Conference, Recurring]);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::RawDocument;
    use serde_json::json;

    #[test]
    fn test_conference_days_use_date_only() {
        let event: HostedEvent = serde_json::from_value(json!({
            "event_type": "CONFERENCE",
            "name": "DevCon",
            "days": [{"date": "2024-09-10", "start_time": "09:00", "end_time": "17:00"}]
        }))
        .unwrap();

        let HostedEvent::Conference(conference) = event else {
            panic!("expected conference");
        };
        assert_eq!(conference.days[0].date, NaiveDate::from_ymd_opt(2024, 9, 10));
    }

    #[test]
    fn test_string_discriminator_is_exact() {
        let err = HostedEvent::decode(&RawDocument::from_value(json!({"event_type": "conference"})))
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownDiscriminator { .. }));
        assert!(err.to_string().contains("conference"));
    }

    #[test]
    fn test_round_trip_keeps_event_type() {
        let event = HostedEvent::Recurring(RecurringEvent {
            base: HostedEventBase {
                event_type: Some(HostedEventType::Recurring),
                ..HostedEventBase::default()
            },
            recurrence: Some(EventRecurrence {
                end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
                ..EventRecurrence::default()
            }),
        });

        let encoded = serde_json::to_value(&event).unwrap();
        assert_eq!(
            encoded,
            json!({"event_type": "RECURRING", "recurrence": {"end_date": "2025-01-31"}})
        );
        assert_eq!(serde_json::from_value::<HostedEvent>(encoded).unwrap(), event);
    }
}
