//! Room system events.

use super::payload::{ObjectPayload, UpdatedPayload};
use wire_codec::models::{ZoomRoom, ZoomRoomAlert};

event_family! {
    /// `zoomroom.*` events.
    ZoomRoomEvent => ZoomRoom {
        "zoomroom.alert" => Alert(ObjectPayload<ZoomRoomAlert>),
        "zoomroom.delayed_alert" => DelayedAlert(ObjectPayload<ZoomRoomAlert>),
        "zoomroom.checked_in" => CheckedIn(ObjectPayload<ZoomRoom>),
        "zoomroom.checked_out" => CheckedOut(ObjectPayload<ZoomRoom>),
        "zoomroom.sensor_data" => SensorData(ObjectPayload<ZoomRoom>),
        "zoomroom.room_settings_updated" => SettingsUpdated(UpdatedPayload),
    }
}
