//! Cloud recording and transcript events.

use super::payload::{GenericPayload, ObjectPayload};
use wire_codec::models::RecordingMeeting;

event_family! {
    /// `recording.*` events.
    RecordingEvent => Recording {
        "recording.started" => Started(ObjectPayload<RecordingMeeting>),
        "recording.paused" => Paused(ObjectPayload<RecordingMeeting>),
        "recording.resumed" => Resumed(ObjectPayload<RecordingMeeting>),
        "recording.stopped" => Stopped(ObjectPayload<RecordingMeeting>),
        "recording.completed" => Completed(ObjectPayload<RecordingMeeting>),
        "recording.renamed" => Renamed(GenericPayload),
        "recording.trashed" => Trashed(ObjectPayload<RecordingMeeting>),
        "recording.deleted" => Deleted(ObjectPayload<RecordingMeeting>),
        "recording.recovered" => Recovered(ObjectPayload<RecordingMeeting>),
        "recording.transcript_completed" => TranscriptCompleted(ObjectPayload<RecordingMeeting>),
        "recording.batch_trashed" => BatchTrashed(GenericPayload),
        "recording.batch_deleted" => BatchDeleted(GenericPayload),
        "recording.batch_recovered" => BatchRecovered(GenericPayload),
        "recording.cloud_storage_usage_updated" => CloudStorageUsageUpdated(GenericPayload),
        "recording.registration_created" => RegistrationCreated(GenericPayload),
        "recording.registration_approved" => RegistrationApproved(GenericPayload),
        "recording.registration_denied" => RegistrationDenied(GenericPayload),
        "recording.archive_files_completed" => ArchiveFilesCompleted(ObjectPayload<RecordingMeeting>),
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

    #[test]
    fn test_completed_lists_files() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("recording.completed").unwrap();

        let event = decode(Some(&json!({
            "object": {
                "uuid": "r1",
                "topic": "Standup",
                "recording_files": [
                    {"id": "f1", "file_type": "MP4", "recording_start": "2024-05-01T10:00:00Z"},
                    {"id": "f2", "file_type": "TRANSCRIPT"}
                ]
            }
        })))
        .unwrap();

        let WebhookEvent::Recording(RecordingEvent::Completed(payload)) = event else {
            unreachable!("recording.completed decodes to Completed");
        };
        let recording = payload.object.unwrap();
        assert_eq!(recording.recording_files.len(), 2);
        assert_eq!(recording.recording_files[1].file_type.as_deref(), Some("TRANSCRIPT"));
    }
}
