//! Meeting and webinar registrants.

use crate::scalar::{KeyValueList, KeyValuePair, LocalTimestamp, TitleValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// A registration for a meeting or webinar.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registrant {
    pub id: Option<String>,

    pub email: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub address: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub zip: Option<String>,

    pub country: Option<String>,

    pub phone: Option<String>,

    pub industry: Option<String>,

    pub org: Option<String>,

    pub job_title: Option<String>,

    pub purchasing_time_frame: Option<String>,

    pub role_in_purchase_process: Option<String>,

    pub no_of_employees: Option<String>,

    pub comments: Option<String>,

    /// Answers to host-defined questions as `{title, value}` pairs.
    #[serde_as(as = "Option<KeyValueList<TitleValue>>")]
    pub custom_questions: Option<Vec<KeyValuePair>>,

    /// `approved`, `pending` or `denied`.
    pub status: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub create_time: Option<DateTime<Utc>>,

    pub join_url: Option<String>,
}
