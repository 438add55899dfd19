//! Scalar codecs: pure decode/encode pairs over one primitive wire shape.
//!
//! Each codec is a zero-sized marker type implementing [`ScalarCodec`]. The
//! same marker is usable as a per-field override on any modeled type:
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//! use serde_with::serde_as;
//! use wire_codec::scalar::{EpochSeconds, TolerantBool};
//!
//! #[serde_as]
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Sample {
//!     #[serde_as(as = "Option<EpochSeconds>")]
//!     created: Option<DateTime<Utc>>,
//!     #[serde_as(as = "TolerantBool")]
//!     enabled: bool,
//! }
//!
//! let sample: Sample = serde_json::from_str(r#"{"created": 1700000000, "enabled": 1}"#).unwrap();
//! assert!(sample.enabled);
//! ```
//!
//! Failures are hard (`CodecError::MalformedScalar` / `NullOrEmpty`) except
//! inside [`KeyValueList`], where a malformed entry is dropped.

use crate::error::CodecError;
use serde_json::Value;

/// A pure translator between one JSON wire shape and a Rust value.
pub trait ScalarCodec {
    /// The decoded Rust value.
    type Value;

    /// Human readable name of the wire shape, used in error messages.
    const SHAPE: &'static str;

    /// Decode a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` when the token kind or shape does not match.
    fn decode(raw: &Value) -> Result<Self::Value, CodecError>;

    /// Encode a value into its wire shape.
    fn encode(value: &Self::Value) -> Value;
}

/// Implement `serde_with::SerializeAs`/`DeserializeAs` for a codec so it can
/// be named in `#[serde_as(as = "...")]`, including inside `Option<...>` and
/// `Vec<...>`.
macro_rules! scalar_serde_as {
    ($codec:ty => $value:ty) => {
        impl serde_with::SerializeAs<$value> for $codec {
            fn serialize_as<S>(value: &$value, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(
                    &<$codec as $crate::scalar::ScalarCodec>::encode(value),
                    serializer,
                )
            }
        }

        impl<'de> serde_with::DeserializeAs<'de, $value> for $codec {
            fn deserialize_as<D>(deserializer: D) -> Result<$value, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <$codec as $crate::scalar::ScalarCodec>::decode(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Parse a numeral string: ASCII digits with an optional leading `-`. Signs,
/// whitespace and decimal points are rejected.
pub(crate) fn parse_numeral(literal: &str) -> Option<i64> {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    literal.parse().ok()
}

mod boolean;
mod datetime;
mod flags;
mod key_value;
mod list;
mod weekday;

pub use boolean::TolerantBool;
pub use datetime::{DateOnly, EpochMillis, EpochSeconds, LocalTimestamp};
pub use flags::{Flag, FlagSet, FLAG_SEPARATOR};
pub use key_value::{
    FieldValue, IdName, KeyValue, KeyValueList, KeyValueNames, KeyValuePair, TitleAnswer,
    TitleValue,
};
pub use list::{Comma, Delimited, Delimiter, Semicolon};
pub use weekday::{DayOfWeek, WeekdayList};
