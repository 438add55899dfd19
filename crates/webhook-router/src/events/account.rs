//! Account lifecycle and settings events.

use super::payload::{ObjectPayload, UpdatedPayload};
use wire_codec::models::Account;

event_family! {
    /// `account.*` events.
    AccountEvent => Account {
        "account.created" => Created(ObjectPayload<Account>),
        "account.updated" => Updated(UpdatedPayload),
        "account.disassociated" => Disassociated(ObjectPayload<Account>),
        "account.settings_updated" => SettingsUpdated(UpdatedPayload),
        "account.lock_settings_updated" => LockSettingsUpdated(UpdatedPayload),
        "account.vanity_url_approved" => VanityUrlApproved(ObjectPayload<Account>),
        "account.vanity_url_rejected" => VanityUrlRejected(ObjectPayload<Account>),
    }
}
