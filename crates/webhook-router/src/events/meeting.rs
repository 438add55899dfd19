//! Meeting lifecycle and in-meeting activity events.

use super::payload::{GenericPayload, ObjectPayload, RtmsPayload, SessionActivity, UpdatedPayload};
use wire_codec::models::{ChatMessage, Meeting};

event_family! {
    /// `meeting.*` events.
    ///
    /// Lifecycle events carry the meeting resolved through its `type` code.
    /// Activity events (participants, registrants, sharing) carry a
    /// [`SessionActivity`].
    MeetingEvent => Meeting {
        "meeting.created" => Created(ObjectPayload<Meeting>),
        "meeting.updated" => Updated(UpdatedPayload),
        "meeting.deleted" => Deleted(ObjectPayload<Meeting>),
        "meeting.recovered" => Recovered(ObjectPayload<Meeting>),
        "meeting.permanently_deleted" => PermanentlyDeleted(ObjectPayload<Meeting>),
        "meeting.started" => Started(ObjectPayload<Meeting>),
        "meeting.ended" => Ended(ObjectPayload<Meeting>),
        "meeting.alert" => Alert(GenericPayload),
        "meeting.risk_alert" => RiskAlert(GenericPayload),
        "meeting.device_tested" => DeviceTested(ObjectPayload<SessionActivity>),
        "meeting.invitation_accepted" => InvitationAccepted(GenericPayload),
        "meeting.invitation_dispatched" => InvitationDispatched(GenericPayload),
        "meeting.invitation_rejected" => InvitationRejected(GenericPayload),
        "meeting.invitation_timeout" => InvitationTimeout(GenericPayload),

        // registration
        "meeting.registration_created" => RegistrationCreated(ObjectPayload<SessionActivity>),
        "meeting.registration_approved" => RegistrationApproved(ObjectPayload<SessionActivity>),
        "meeting.registration_cancelled" => RegistrationCancelled(ObjectPayload<SessionActivity>),
        "meeting.registration_denied" => RegistrationDenied(ObjectPayload<SessionActivity>),

        // sharing
        "meeting.sharing_started" => SharingStarted(ObjectPayload<SessionActivity>),
        "meeting.sharing_ended" => SharingEnded(ObjectPayload<SessionActivity>),

        // participants
        "meeting.participant_jbh_joined" => ParticipantJbhJoined(ObjectPayload<SessionActivity>),
        "meeting.participant_jbh_waiting" => ParticipantJbhWaiting(ObjectPayload<SessionActivity>),
        "meeting.participant_jbh_waiting_left" => ParticipantJbhWaitingLeft(ObjectPayload<SessionActivity>),
        "meeting.participant_joined" => ParticipantJoined(ObjectPayload<SessionActivity>),
        "meeting.participant_left" => ParticipantLeft(ObjectPayload<SessionActivity>),
        "meeting.participant_joined_waiting_room" => ParticipantJoinedWaitingRoom(ObjectPayload<SessionActivity>),
        "meeting.participant_left_waiting_room" => ParticipantLeftWaitingRoom(ObjectPayload<SessionActivity>),
        "meeting.participant_put_in_waiting_room" => ParticipantPutInWaitingRoom(ObjectPayload<SessionActivity>),
        "meeting.participant_admitted" => ParticipantAdmitted(ObjectPayload<SessionActivity>),
        "meeting.participant_joined_breakout_room" => ParticipantJoinedBreakoutRoom(ObjectPayload<SessionActivity>),
        "meeting.participant_left_breakout_room" => ParticipantLeftBreakoutRoom(ObjectPayload<SessionActivity>),
        "meeting.participant_role_changed" => ParticipantRoleChanged(ObjectPayload<SessionActivity>),
        "meeting.participant_feedback" => ParticipantFeedback(ObjectPayload<SessionActivity>),
        "meeting.participant_room_system_callout_accepted" => RoomSystemCalloutAccepted(ObjectPayload<SessionActivity>),
        "meeting.participant_room_system_callout_missed" => RoomSystemCalloutMissed(ObjectPayload<SessionActivity>),
        "meeting.participant_room_system_callout_rejected" => RoomSystemCalloutRejected(ObjectPayload<SessionActivity>),
        "meeting.participant_room_system_callout_ringing" => RoomSystemCalloutRinging(ObjectPayload<SessionActivity>),
        "meeting.participant_phone_callout_accepted" => PhoneCalloutAccepted(ObjectPayload<SessionActivity>),
        "meeting.participant_phone_callout_missed" => PhoneCalloutMissed(ObjectPayload<SessionActivity>),
        "meeting.participant_phone_callout_rejected" => PhoneCalloutRejected(ObjectPayload<SessionActivity>),
        "meeting.participant_phone_callout_ringing" => PhoneCalloutRinging(ObjectPayload<SessionActivity>),

        // live streaming
        "meeting.live_streaming_started" => LiveStreamingStarted(GenericPayload),
        "meeting.live_streaming_stopped" => LiveStreamingStopped(GenericPayload),

        // chat
        "meeting.chat_message_sent" => ChatMessageSent(ObjectPayload<ChatMessage>),
        "meeting.chat_message_file_sent" => ChatMessageFileSent(ObjectPayload<ChatMessage>),

        // summaries
        "meeting.summary_completed" => SummaryCompleted(GenericPayload),
        "meeting.summary_updated" => SummaryUpdated(GenericPayload),
        "meeting.summary_deleted" => SummaryDeleted(GenericPayload),
        "meeting.summary_recovered" => SummaryRecovered(GenericPayload),
        "meeting.summary_shared" => SummaryShared(GenericPayload),

        // realtime media streams
        "meeting.rtms_started" => RtmsStarted(RtmsPayload),
        "meeting.rtms_stopped" => RtmsStopped(RtmsPayload),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::events::WebhookEvent;
    use crate::registry::EventRegistry;
    use serde_json::json;
    use wire_codec::models::{Meeting, ParticipantDevice};

    fn decode(event_type: &str, payload: serde_json::Value) -> WebhookEvent {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get(event_type).unwrap();
        decode(Some(&payload)).unwrap()
    }

    #[test]
    fn test_started_resolves_meeting_shape() {
        let event = decode(
            "meeting.started",
            json!({
                "account_id": "acc",
                "object": {"id": 85_746_065_i64, "type": 8, "topic": "Weekly", "host_id": "h1"}
            }),
        );

        let WebhookEvent::Meeting(MeetingEvent::Started(payload)) = event else {
            unreachable!("meeting.started decodes to Started");
        };
        let Some(Meeting::Recurring(meeting)) = payload.object else {
            unreachable!("type 8 is a recurring meeting");
        };
        assert_eq!(meeting.base.topic.as_deref(), Some("Weekly"));
    }

    #[test]
    fn test_participant_joined_decodes_devices() {
        let event = decode(
            "meeting.participant_joined",
            json!({
                "object": {
                    "uuid": "u1",
                    "type": 2,
                    "participant": {"user_name": "Ada", "device": "Mac + Web"}
                }
            }),
        );

        let WebhookEvent::Meeting(MeetingEvent::ParticipantJoined(payload)) = event else {
            unreachable!("meeting.participant_joined decodes to ParticipantJoined");
        };
        let activity = payload.object.unwrap();
        assert_eq!(activity.session_type, Some(2));
        let participant = activity.participant.unwrap();
        assert_eq!(participant.device.len(), 2);
        assert_eq!(participant.device[0], ParticipantDevice::Mac);
    }

    #[test]
    fn test_unmapped_meeting_type_fails_whole_event() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("meeting.created").unwrap();

        let result = decode(Some(&json!({"object": {"id": 1, "type": 7}})));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_payload_decodes_to_default() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("meeting.ended").unwrap();

        let event = decode(None).unwrap();
        assert_eq!(
            event,
            WebhookEvent::Meeting(MeetingEvent::Ended(ObjectPayload::default()))
        );
    }
}
