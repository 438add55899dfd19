//! Event type registry.
//!
//! Maps each wire event type to the function that decodes its payload. The
//! registry is built once and read-only afterwards, so one instance can be
//! shared across threads without locking.

use crate::error::RouterError;
use crate::events::{self, WebhookEvent};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use wire_codec::CodecError;

/// Decodes an event payload. `None` when the envelope had no `payload`.
pub type EventDecodeFn = fn(Option<&Value>) -> Result<WebhookEvent, CodecError>;

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct EventDescriptor {
    pub event_type: &'static str,

    pub decode: EventDecodeFn,
}

/// Immutable mapping from wire event type to payload decoder.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    decoders: HashMap<&'static str, EventDecodeFn>,
}

// The standard families are declared statically and carry no duplicates.
// `test_standard_registry_has_no_duplicates` pins this.
#[allow(clippy::expect_used)]
static SHARED: LazyLock<EventRegistry> = LazyLock::new(|| {
    EventRegistry::standard().expect("standard event families register each type once")
});

impl EventRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry holding every standard event family.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateEventType` if two families register the
    /// same event type.
    pub fn standard() -> Result<Self, RouterError> {
        Self::builder().with_standard_events().build()
    }

    /// The process-wide standard registry, built on first use.
    #[must_use]
    pub fn shared() -> &'static EventRegistry {
        &SHARED
    }

    /// Decoder for an event type.
    #[must_use]
    pub fn get(&self, event_type: &str) -> Option<EventDecodeFn> {
        self.decoders.get(event_type).copied()
    }

    #[must_use]
    pub fn contains(&self, event_type: &str) -> bool {
        self.decoders.contains_key(event_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Entry for an event type.
    #[must_use]
    pub fn descriptor(&self, event_type: &str) -> Option<EventDescriptor> {
        self.decoders
            .get_key_value(event_type)
            .map(|(&event_type, &decode)| EventDescriptor { event_type, decode })
    }

    /// Registered event types, sorted.
    #[must_use]
    pub fn event_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.decoders.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

/// Collects registrations and rejects duplicates on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    decoders: HashMap<&'static str, EventDecodeFn>,
    duplicates: Vec<&'static str>,
}

impl RegistryBuilder {
    /// Register a decoder for an event type.
    pub fn register(&mut self, event_type: &'static str, decode: EventDecodeFn) -> &mut Self {
        if self.decoders.insert(event_type, decode).is_some() {
            self.duplicates.push(event_type);
        }
        self
    }

    /// Register every standard event family.
    #[must_use]
    pub fn with_standard_events(mut self) -> Self {
        events::register_all(&mut self);
        self
    }

    /// Finish the registry.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateEventType` naming the first event type
    /// registered more than once.
    pub fn build(self) -> Result<EventRegistry, RouterError> {
        if let Some(&duplicate) = self.duplicates.first() {
            tracing::error!(
                target: "webhook_router.registry",
                event_type = duplicate,
                "Event type registered twice"
            );
            return Err(RouterError::DuplicateEventType(duplicate));
        }

        tracing::debug!(
            target: "webhook_router.registry",
            event_types = self.decoders.len(),
            "Event registry built"
        );
        Ok(EventRegistry {
            decoders: self.decoders,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::events::{EndpointEvent, UnknownEvent};
    use std::collections::HashSet;

    fn custom(payload: Option<&Value>) -> Result<WebhookEvent, CodecError> {
        Ok(WebhookEvent::Unknown(UnknownEvent {
            event_type: "custom.event".to_string(),
            payload: payload.cloned().unwrap_or(Value::Null),
        }))
    }

    // ---- standard registry ----

    #[test]
    fn test_standard_registry_has_no_duplicates() {
        let registry = EventRegistry::standard().unwrap();
        assert!(registry.len() > 150, "only {} event types", registry.len());
    }

    #[test]
    fn test_family_tables_are_disjoint() {
        let mut seen = HashSet::new();
        let families = [
            events::AccountEvent::EVENT_TYPES,
            events::AppEvent::EVENT_TYPES,
            events::ChatEvent::EVENT_TYPES,
            events::EndpointEvent::EVENT_TYPES,
            events::HostedEventNotification::EVENT_TYPES,
            events::MeetingEvent::EVENT_TYPES,
            events::PhoneEvent::EVENT_TYPES,
            events::RecordingEvent::EVENT_TYPES,
            events::UserEvent::EVENT_TYPES,
            events::WebinarEvent::EVENT_TYPES,
            events::ZoomRoomEvent::EVENT_TYPES,
        ];

        for event_type in families.into_iter().flatten() {
            assert!(seen.insert(*event_type), "{event_type} appears twice");
        }
        assert_eq!(seen.len(), EventRegistry::standard().unwrap().len());
    }

    #[test]
    fn test_shared_matches_standard() {
        assert_eq!(
            EventRegistry::shared().event_types(),
            EventRegistry::standard().unwrap().event_types()
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = EventRegistry::shared();
        assert!(registry.contains("meeting.started"));
        assert!(!registry.contains("Meeting.Started"));
        assert!(!registry.contains("meeting.started "));
        assert!(registry.get("meeting.teleported").is_none());
    }

    // ---- builder ----

    #[test]
    fn test_builder_rejects_duplicates() {
        let mut builder = EventRegistry::builder().with_standard_events();
        builder.register("meeting.started", custom);

        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            RouterError::DuplicateEventType("meeting.started")
        ));
    }

    #[test]
    fn test_builder_accepts_custom_events() {
        let mut builder = EventRegistry::builder();
        builder
            .register("custom.event", custom)
            .register("endpoint.url_validation", |payload| {
                wire_codec::entity::decode_or_default(payload)
                    .map(|p| WebhookEvent::Endpoint(EndpointEvent::UrlValidation(p)))
            });
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.event_types(),
            vec!["custom.event", "endpoint.url_validation"]
        );
    }

    #[test]
    fn test_descriptor_decodes_its_event_type() {
        let descriptor = EventRegistry::shared()
            .descriptor("endpoint.url_validation")
            .unwrap();
        assert_eq!(descriptor.event_type, "endpoint.url_validation");

        let event = (descriptor.decode)(None).unwrap();
        assert_eq!(event.event_type(), descriptor.event_type);
    }

    #[test]
    fn test_empty_builder() {
        let registry = EventRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
    }
}
