//! Hosted event (event hub) notifications.

use super::payload::{ObjectPayload, UpdatedPayload};
use wire_codec::models::HostedEvent;

event_family! {
    /// `zoom_events.*` notifications about hosted event listings.
    ///
    /// The `object` is resolved to a concrete shape by its `event_type`.
    HostedEventNotification => HostedEvent {
        "zoom_events.event_created" => Created(ObjectPayload<HostedEvent>),
        "zoom_events.event_updated" => Updated(UpdatedPayload),
        "zoom_events.event_published" => Published(ObjectPayload<HostedEvent>),
        "zoom_events.event_cancelled" => Cancelled(ObjectPayload<HostedEvent>),
        "zoom_events.event_deleted" => Deleted(ObjectPayload<HostedEvent>),
        "zoom_events.event_ended" => Ended(ObjectPayload<HostedEvent>),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::events::WebhookEvent;
    use crate::registry::EventRegistry;
    use serde_json::json;
    use wire_codec::models::HostedEvent;

    #[test]
    fn test_published_resolves_conference() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("zoom_events.event_published").unwrap();

        let event = decode(Some(&json!({
            "object": {
                "event_id": "ev-1",
                "event_type": "CONFERENCE",
                "days": [{"date": "2024-05-01"}]
            }
        })))
        .unwrap();

        let WebhookEvent::HostedEvent(HostedEventNotification::Published(payload)) = event else {
            unreachable!("zoom_events.event_published decodes to Published");
        };
        assert!(matches!(payload.object, Some(HostedEvent::Conference(_))));
    }

    #[test]
    fn test_unmapped_hosted_event_type_fails() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("zoom_events.event_created").unwrap();

        let result = decode(Some(&json!({"object": {"event_type": "FESTIVAL"}})));
        assert!(result.is_err());
    }
}
