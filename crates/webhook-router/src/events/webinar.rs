//! Webinar lifecycle and attendee events.

use super::payload::{GenericPayload, ObjectPayload, SessionActivity, UpdatedPayload};
use wire_codec::models::{ChatMessage, Webinar};

event_family! {
    /// `webinar.*` events.
    WebinarEvent => Webinar {
        "webinar.created" => Created(ObjectPayload<Webinar>),
        "webinar.updated" => Updated(UpdatedPayload),
        "webinar.deleted" => Deleted(ObjectPayload<Webinar>),
        "webinar.recovered" => Recovered(ObjectPayload<Webinar>),
        "webinar.permanently_deleted" => PermanentlyDeleted(ObjectPayload<Webinar>),
        "webinar.started" => Started(ObjectPayload<Webinar>),
        "webinar.ended" => Ended(ObjectPayload<Webinar>),
        "webinar.alert" => Alert(GenericPayload),
        "webinar.converted_to_meeting" => ConvertedToMeeting(GenericPayload),

        "webinar.registration_created" => RegistrationCreated(ObjectPayload<SessionActivity>),
        "webinar.registration_approved" => RegistrationApproved(ObjectPayload<SessionActivity>),
        "webinar.registration_cancelled" => RegistrationCancelled(ObjectPayload<SessionActivity>),
        "webinar.registration_denied" => RegistrationDenied(ObjectPayload<SessionActivity>),

        "webinar.sharing_started" => SharingStarted(ObjectPayload<SessionActivity>),
        "webinar.sharing_ended" => SharingEnded(ObjectPayload<SessionActivity>),

        "webinar.participant_joined" => ParticipantJoined(ObjectPayload<SessionActivity>),
        "webinar.participant_left" => ParticipantLeft(ObjectPayload<SessionActivity>),
        "webinar.participant_role_changed" => ParticipantRoleChanged(ObjectPayload<SessionActivity>),
        "webinar.participant_feedback" => ParticipantFeedback(ObjectPayload<SessionActivity>),

        "webinar.chat_message_sent" => ChatMessageSent(ObjectPayload<ChatMessage>),
        "webinar.chat_message_file_sent" => ChatMessageFileSent(ObjectPayload<ChatMessage>),

        "webinar.live_streaming_started" => LiveStreamingStarted(GenericPayload),
        "webinar.live_streaming_stopped" => LiveStreamingStopped(GenericPayload),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::events::WebhookEvent;
    use crate::registry::EventRegistry;
    use serde_json::json;
    use wire_codec::models::Webinar;

    #[test]
    fn test_created_resolves_recurring_fixed_time() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("webinar.created").unwrap();

        let event = decode(Some(&json!({
            "object": {"id": 9, "type": "9", "topic": "Town hall"}
        })))
        .unwrap();

        let WebhookEvent::Webinar(WebinarEvent::Created(payload)) = event else {
            unreachable!("webinar.created decodes to Created");
        };
        assert!(matches!(
            payload.object,
            Some(Webinar::RecurringFixedTime(_))
        ));
    }

    #[test]
    fn test_registration_carries_custom_questions() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("webinar.registration_created").unwrap();

        let event = decode(Some(&json!({
            "object": {
                "id": 9,
                "registrant": {
                    "email": "r@example.com",
                    "custom_questions": [{"title": "Role", "value": "Engineer"}]
                }
            }
        })))
        .unwrap();

        let WebhookEvent::Webinar(WebinarEvent::RegistrationCreated(payload)) = event else {
            unreachable!("webinar.registration_created decodes to RegistrationCreated");
        };
        let registrant = payload.object.unwrap().registrant.unwrap();
        assert_eq!(registrant.email.as_deref(), Some("r@example.com"));
    }
}
