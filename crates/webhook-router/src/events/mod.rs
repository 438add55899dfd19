//! Webhook event types.
//!
//! Events are grouped into families, one module per family. Each family is
//! declared with `event_family!`, which generates the family enum, its wire
//! names, and the registrations that put every event type into an
//! [`EventRegistry`](crate::registry::EventRegistry). Adding an event type is
//! one line in its family.

use chrono::{DateTime, Utc};
use serde_json::Value;
use wire_codec::CodecError;

/// Declare an event family.
///
/// ```text
/// event_family! {
///     /// Docs.
///     AccountEvent => Account {
///         "account.created" => Created(ObjectPayload<Account>),
///     }
/// }
/// ```
///
/// `Account` is the [`WebhookEvent`] variant wrapping the family.
macro_rules! event_family {
    (
        $(#[$meta:meta])*
        $family:ident => $outer:ident {
            $( $(#[$vmeta:meta])* $wire:literal => $variant:ident($payload:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $family {
            $( $(#[$vmeta])* $variant($payload), )+
        }

        impl $family {
            /// Wire event types of this family.
            pub const EVENT_TYPES: &'static [&'static str] = &[$($wire),+];

            /// The wire event type.
            #[must_use]
            pub fn event_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $wire, )+
                }
            }

            pub(crate) fn encode_payload(
                &self,
            ) -> Result<serde_json::Value, wire_codec::CodecError> {
                match self {
                    $( Self::$variant(payload) => wire_codec::entity::encode(payload), )+
                }
            }

            /// Register every event type of this family.
            pub fn register(builder: &mut $crate::registry::RegistryBuilder) {
                $(
                    builder.register($wire, |payload| {
                        wire_codec::entity::decode_or_default::<$payload>(payload)
                            .map(|decoded| $crate::events::WebhookEvent::$outer(Self::$variant(decoded)))
                    });
                )+
            }
        }
    };
}

pub mod account;
pub mod app;
pub mod chat;
pub mod endpoint;
pub mod hosted_event;
pub mod meeting;
pub mod payload;
pub mod phone;
pub mod recording;
pub mod user;
pub mod webinar;
pub mod zoom_room;

pub use account::AccountEvent;
pub use app::AppEvent;
pub use chat::ChatEvent;
pub use endpoint::EndpointEvent;
pub use hosted_event::HostedEventNotification;
pub use meeting::MeetingEvent;
pub use payload::{
    GenericPayload, ObjectPayload, RtmsPayload, SessionActivity, UpdatedPayload,
    UrlValidationPayload,
};
pub use phone::PhoneEvent;
pub use recording::RecordingEvent;
pub use user::UserEvent;
pub use webinar::WebinarEvent;
pub use zoom_room::ZoomRoomEvent;

/// A decoded webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Webhook {
    /// Envelope `event_ts`. The Unix epoch when the envelope had none.
    pub timestamp: DateTime<Utc>,

    pub event: WebhookEvent,
}

impl Webhook {
    /// The wire event type.
    #[must_use]
    pub fn event_type(&self) -> &str {
        self.event.event_type()
    }
}

/// A typed webhook event, or the carrier for an unregistered event type.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    Account(AccountEvent),
    App(AppEvent),
    Chat(ChatEvent),
    Endpoint(EndpointEvent),
    HostedEvent(HostedEventNotification),
    Meeting(MeetingEvent),
    Phone(PhoneEvent),
    Recording(RecordingEvent),
    User(UserEvent),
    Webinar(WebinarEvent),
    ZoomRoom(ZoomRoomEvent),
    /// An event type with no registry entry.
    Unknown(UnknownEvent),
}

/// Carrier for an event type the registry does not know.
///
/// The payload is kept exactly as received so that a newly introduced
/// upstream event can still be logged, stored or forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEvent {
    /// The literal `event` string.
    pub event_type: String,

    /// The raw `payload`, `Value::Null` when the envelope had none.
    pub payload: Value,
}

impl WebhookEvent {
    /// The wire event type.
    #[must_use]
    pub fn event_type(&self) -> &str {
        match self {
            WebhookEvent::Account(e) => e.event_type(),
            WebhookEvent::App(e) => e.event_type(),
            WebhookEvent::Chat(e) => e.event_type(),
            WebhookEvent::Endpoint(e) => e.event_type(),
            WebhookEvent::HostedEvent(e) => e.event_type(),
            WebhookEvent::Meeting(e) => e.event_type(),
            WebhookEvent::Phone(e) => e.event_type(),
            WebhookEvent::Recording(e) => e.event_type(),
            WebhookEvent::User(e) => e.event_type(),
            WebhookEvent::Webinar(e) => e.event_type(),
            WebhookEvent::ZoomRoom(e) => e.event_type(),
            WebhookEvent::Unknown(e) => &e.event_type,
        }
    }

    /// Whether this is the carrier for an unregistered event type.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, WebhookEvent::Unknown(_))
    }

    /// Encode the payload, pruning empty objects.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Entity` if serialization fails.
    pub fn encode_payload(&self) -> Result<Value, CodecError> {
        match self {
            WebhookEvent::Account(e) => e.encode_payload(),
            WebhookEvent::App(e) => e.encode_payload(),
            WebhookEvent::Chat(e) => e.encode_payload(),
            WebhookEvent::Endpoint(e) => e.encode_payload(),
            WebhookEvent::HostedEvent(e) => e.encode_payload(),
            WebhookEvent::Meeting(e) => e.encode_payload(),
            WebhookEvent::Phone(e) => e.encode_payload(),
            WebhookEvent::Recording(e) => e.encode_payload(),
            WebhookEvent::User(e) => e.encode_payload(),
            WebhookEvent::Webinar(e) => e.encode_payload(),
            WebhookEvent::ZoomRoom(e) => e.encode_payload(),
            WebhookEvent::Unknown(e) => Ok(e.payload.clone()),
        }
    }
}

/// Register every standard event family.
pub(crate) fn register_all(builder: &mut crate::registry::RegistryBuilder) {
    AccountEvent::register(builder);
    AppEvent::register(builder);
    ChatEvent::register(builder);
    EndpointEvent::register(builder);
    HostedEventNotification::register(builder);
    MeetingEvent::register(builder);
    PhoneEvent::register(builder);
    RecordingEvent::register(builder);
    UserEvent::register(builder);
    WebinarEvent::register(builder);
    ZoomRoomEvent::register(builder);
}
