//! Marketplace app authorization events.

use super::payload::ObjectPayload;
use wire_codec::models::{AppAuthorization, AppDeauthorization};

event_family! {
    /// App install and removal events.
    AppEvent => App {
        /// A user removed the app. The payload is the deauthorization itself,
        /// not wrapped in `object`.
        "app_deauthorized" => Deauthorized(AppDeauthorization),
        "app.authorization_request_created" => AuthorizationRequestCreated(ObjectPayload<AppAuthorization>),
        "app.authorized" => Authorized(AppAuthorization),
    }
}
