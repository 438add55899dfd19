//! Accounts and app authorization.

use crate::scalar::LocalTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

/// An account or sub account.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: Option<String>,

    pub account_name: Option<String>,

    pub account_alias: Option<String>,

    pub account_number: Option<i64>,

    pub owner_email: Option<String>,

    pub account_support_name: Option<String>,

    pub account_support_email: Option<String>,

    pub vanity_url: Option<String>,

    pub account_type: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user removed an app from their account.
///
/// Receivers are expected to delete the user's data and confirm through the
/// data compliance API.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppDeauthorization {
    pub account_id: Option<String>,

    pub user_id: Option<String>,

    pub client_id: Option<String>,

    /// Opaque value to echo back when confirming compliance.
    pub signature: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub deauthorization_time: Option<DateTime<Utc>>,
}

/// A user installed or re-authorized an app.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppAuthorization {
    pub account_id: Option<String>,

    pub user_id: Option<String>,

    pub client_id: Option<String>,

    #[serde_as(as = "Option<LocalTimestamp>")]
    pub authorization_time: Option<DateTime<Utc>>,
}
