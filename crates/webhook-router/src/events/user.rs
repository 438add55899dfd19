//! User lifecycle, sign-in and presence events.

use super::payload::{GenericPayload, ObjectPayload, UpdatedPayload};
use wire_codec::models::{PresenceStatus, User};

event_family! {
    /// `user.*` events.
    UserEvent => User {
        "user.created" => Created(ObjectPayload<User>),
        "user.updated" => Updated(UpdatedPayload),
        "user.deleted" => Deleted(ObjectPayload<User>),
        "user.disassociated" => Disassociated(ObjectPayload<User>),
        "user.activated" => Activated(ObjectPayload<User>),
        "user.deactivated" => Deactivated(ObjectPayload<User>),
        "user.invitation_accepted" => InvitationAccepted(ObjectPayload<User>),
        "user.signed_in" => SignedIn(ObjectPayload<User>),
        "user.signed_out" => SignedOut(ObjectPayload<User>),
        "user.presence_status_updated" => PresenceStatusUpdated(ObjectPayload<PresenceStatus>),
        "user.personal_notes_updated" => PersonalNotesUpdated(GenericPayload),
        "user.settings_updated" => SettingsUpdated(UpdatedPayload),
        "user.tsp_created" => TspCreated(GenericPayload),
        "user.tsp_updated" => TspUpdated(UpdatedPayload),
        "user.tsp_deleted" => TspDeleted(GenericPayload),
    }
}
