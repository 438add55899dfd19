//! Domain types.
//!
//! Every modeled type follows the same conventions:
//!
//! - `#[serde(default)]`: unknown wire fields are ignored, absent fields stay
//!   at `Default`.
//! - `#[skip_serializing_none]` and `skip_serializing_if = "Vec::is_empty"`:
//!   the omission rule applied on encode.
//! - `#[serde_as(as = "...")]` for fields whose wire shape needs a scalar
//!   codec.
//!
//! Unions (`Meeting`, `Webinar`, `Interpreter`, `HostedEvent`) resolve through
//! a static [`DiscriminatorRule`](crate::union::DiscriminatorRule) and encode
//! by delegating to the concrete type.

use crate::error::CodecError;
use crate::scalar::parse_numeral;
use serde_json::Value;

/// Implement the wire representation of an integer-coded enum.
///
/// Codes are written as integers and read from either integers or numeral
/// strings, matching how union discriminators are resolved.
macro_rules! wire_code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The wire code.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::error::CodecError;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err($crate::error::CodecError::malformed(
                        &serde_json::Value::from(other),
                        stringify!($name),
                    )),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $crate::models::parse_code(&raw, stringify!($name))
                    .and_then(Self::try_from)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Implement `Deserialize` through a discriminator rule and `Serialize` by
/// delegating to the wrapped concrete type.
macro_rules! union_serde {
    ($union:ident, $rule:path, [$($variant:ident),+ $(,)?]) => {
        impl $union {
            /// Resolve and decode a buffered document.
            ///
            /// # Errors
            ///
            /// Returns `CodecError` if the discriminator is missing or
            /// unmapped, or the concrete type fails to decode.
            pub fn decode(
                document: &$crate::document::RawDocument,
            ) -> Result<Self, $crate::error::CodecError> {
                $rule.decode(document)
            }
        }

        impl<'de> serde::Deserialize<'de> for $union {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $rule.deserialize(deserializer)
            }
        }

        impl serde::Serialize for $union {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( $union::$variant(inner) => serde::Serialize::serialize(inner, serializer), )+
                }
            }
        }
    };
}

pub mod account;
pub mod chat;
pub mod hosted_event;
pub mod interpreter;
pub mod meeting;
pub mod participant;
pub mod phone;
pub mod recording;
pub mod registrant;
pub mod user;
pub mod webinar;
pub mod zoom_room;

pub use account::{Account, AppAuthorization, AppDeauthorization};
pub use chat::{ChatChannel, ChatFile, ChatMessage};
pub use hosted_event::{
    ConferenceEvent, EventDay, EventRecurrence, HostedEvent, HostedEventBase, HostedEventType,
    RecurringEvent, SimpleEvent,
};
pub use interpreter::{Interpreter, InterpreterType, LanguageInterpreter, SignLanguageInterpreter};
pub use meeting::{
    InstantMeeting, LanguageInterpretation, Meeting, MeetingBase, MeetingSettings, MeetingType,
    Occurrence, Recurrence, RecurrenceType, RecurringMeeting, ScheduledMeeting,
};
pub use participant::{Participant, ParticipantDevice, ParticipantFeedback, SurveyResponse};
pub use phone::{CallLog, CallParty, PhoneUser, Voicemail};
pub use recording::{RecordingFile, RecordingMeeting};
pub use registrant::Registrant;
pub use user::{PresenceStatus, User};
pub use webinar::{
    RecurringWebinarFixedTime, RecurringWebinarNoFixedTime, ScheduledWebinar, Webinar,
    WebinarBase, WebinarSettings, WebinarType,
};
pub use zoom_room::{ZoomRoom, ZoomRoomAlert};

/// Read an integer code sent as a number or a numeral string.
///
/// # Errors
///
/// Returns `CodecError::MalformedScalar` naming `shape` for anything else.
pub fn parse_code(raw: &Value, shape: &'static str) -> Result<i64, CodecError> {
    let code = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_numeral(s),
        _ => None,
    };
    code.ok_or_else(|| CodecError::malformed(raw, shape))
}
