//! Conference room systems.

use crate::scalar::LocalTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// A room as reported by room events.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomRoom {
    pub id: Option<String>,

    pub room_name: Option<String>,

    pub calendar_name: Option<String>,

    pub email: Option<String>,

    pub location_id: Option<String>,

    /// Checked in/out meeting, set by check-in events.
    pub calendar_id: Option<String>,

    pub event_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub change_time: Option<DateTime<Utc>>,

    pub issue: Option<String>,

    pub alert_type: Option<i64>,

    /// 1 alert raised, 2 alert cleared.
    pub alert_kind: Option<i64>,

    pub component: Option<i64>,
}

/// A device alert raised by a room.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomRoomAlert {
    pub room_id: Option<String>,

    pub room_name: Option<String>,

    pub issue: Option<String>,

    pub component: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub date_time: Option<DateTime<Utc>>,
}
