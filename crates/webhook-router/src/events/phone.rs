//! Cloud phone events.

use super::payload::{GenericPayload, ObjectPayload, UpdatedPayload};
use wire_codec::models::{CallLog, PhoneUser, Voicemail};

event_family! {
    /// `phone.*` events.
    PhoneEvent => Phone {
        // caller side
        "phone.caller_ringing" => CallerRinging(ObjectPayload<CallLog>),
        "phone.caller_connected" => CallerConnected(ObjectPayload<CallLog>),
        "phone.caller_ended" => CallerEnded(ObjectPayload<CallLog>),
        "phone.caller_call_log_completed" => CallerCallLogCompleted(ObjectPayload<CallLog>),
        "phone.caller_call_history_completed" => CallerCallHistoryCompleted(ObjectPayload<CallLog>),
        "phone.caller_call_element_completed" => CallerCallElementCompleted(ObjectPayload<CallLog>),
        "phone.caller_hold" => CallerHold(ObjectPayload<CallLog>),
        "phone.caller_unhold" => CallerUnhold(ObjectPayload<CallLog>),
        "phone.caller_mute" => CallerMute(ObjectPayload<CallLog>),
        "phone.caller_unmute" => CallerUnmute(ObjectPayload<CallLog>),

        // callee side
        "phone.callee_ringing" => CalleeRinging(ObjectPayload<CallLog>),
        "phone.callee_answered" => CalleeAnswered(ObjectPayload<CallLog>),
        "phone.callee_missed" => CalleeMissed(ObjectPayload<CallLog>),
        "phone.callee_rejected" => CalleeRejected(ObjectPayload<CallLog>),
        "phone.callee_ended" => CalleeEnded(ObjectPayload<CallLog>),
        "phone.callee_call_log_completed" => CalleeCallLogCompleted(ObjectPayload<CallLog>),
        "phone.callee_call_history_completed" => CalleeCallHistoryCompleted(ObjectPayload<CallLog>),
        "phone.callee_call_element_completed" => CalleeCallElementCompleted(ObjectPayload<CallLog>),
        "phone.callee_hold" => CalleeHold(ObjectPayload<CallLog>),
        "phone.callee_unhold" => CalleeUnhold(ObjectPayload<CallLog>),
        "phone.callee_mute" => CalleeMute(ObjectPayload<CallLog>),
        "phone.callee_unmute" => CalleeUnmute(ObjectPayload<CallLog>),
        "phone.callee_meeting_inviting" => CalleeMeetingInviting(ObjectPayload<CallLog>),
        "phone.callee_parked" => CalleeParked(ObjectPayload<CallLog>),
        "phone.callee_call_transferred" => CalleeCallTransferred(ObjectPayload<CallLog>),

        // recordings and voicemail
        "phone.recording_started" => RecordingStarted(ObjectPayload<CallLog>),
        "phone.recording_paused" => RecordingPaused(ObjectPayload<CallLog>),
        "phone.recording_resumed" => RecordingResumed(ObjectPayload<CallLog>),
        "phone.recording_stopped" => RecordingStopped(ObjectPayload<CallLog>),
        "phone.recording_completed" => RecordingCompleted(ObjectPayload<CallLog>),
        "phone.recording_deleted" => RecordingDeleted(GenericPayload),
        "phone.recording_transcript_completed" => RecordingTranscriptCompleted(GenericPayload),
        "phone.voicemail_received" => VoicemailReceived(ObjectPayload<Voicemail>),
        "phone.voicemail_deleted" => VoicemailDeleted(ObjectPayload<Voicemail>),
        "phone.voicemail_transcript_completed" => VoicemailTranscriptCompleted(ObjectPayload<Voicemail>),

        // SMS
        "phone.sms_sent" => SmsSent(GenericPayload),
        "phone.sms_received" => SmsReceived(GenericPayload),
        "phone.sms_sent_failed" => SmsSentFailed(GenericPayload),

        // provisioning
        "phone.user_created" => UserCreated(ObjectPayload<PhoneUser>),
        "phone.user_deleted" => UserDeleted(ObjectPayload<PhoneUser>),
        "phone.user_updated" => UserUpdated(UpdatedPayload),
        "phone.device_registration" => DeviceRegistration(GenericPayload),
        "phone.emergency_alert" => EmergencyAlert(GenericPayload),
        "phone.peering_number_cnam_updated" => PeeringNumberCnamUpdated(GenericPayload),
        "phone.peering_number_emergency_address_updated" => PeeringNumberEmergencyAddressUpdated(GenericPayload),
        "phone.blind_transfer_initiated" => BlindTransferInitiated(ObjectPayload<CallLog>),
        "phone.warm_transfer_initiated" => WarmTransferInitiated(ObjectPayload<CallLog>),
        "phone.warm_transfer_completed" => WarmTransferCompleted(ObjectPayload<CallLog>),
    }
}
