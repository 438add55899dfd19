//! Date and time shapes.
//!
//! | Codec | Wire | Value |
//! |---|---|---|
//! | [`EpochSeconds`] | `1700000000` | `DateTime<Utc>` |
//! | [`EpochMillis`] | `1700000000123` | `DateTime<Utc>` |
//! | [`DateOnly`] | `"2024-03-01"` | `NaiveDate` |
//! | [`LocalTimestamp`] | `"2024-03-01T09:30:00"` | `DateTime<Utc>` |

use super::ScalarCodec;
use crate::error::CodecError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Format of the local timestamp literal, without the UTC designator.
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Integer seconds since the Unix epoch. Sub-second precision is truncated
/// on encode.
#[derive(Debug, Clone, Copy)]
pub struct EpochSeconds;

impl ScalarCodec for EpochSeconds {
    type Value = DateTime<Utc>;
    const SHAPE: &'static str = "epoch seconds";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        raw.as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| CodecError::malformed(raw, Self::SHAPE))
    }

    fn encode(value: &Self::Value) -> Value {
        Value::from(value.timestamp())
    }
}

scalar_serde_as!(EpochSeconds => DateTime<Utc>);

/// Integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy)]
pub struct EpochMillis;

impl ScalarCodec for EpochMillis {
    type Value = DateTime<Utc>;
    const SHAPE: &'static str = "epoch milliseconds";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        raw.as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| CodecError::malformed(raw, Self::SHAPE))
    }

    fn encode(value: &Self::Value) -> Value {
        Value::from(value.timestamp_millis())
    }
}

scalar_serde_as!(EpochMillis => DateTime<Utc>);

/// A `yyyy-MM-dd` literal with exactly three numeric segments.
#[derive(Debug, Clone, Copy)]
pub struct DateOnly;

impl ScalarCodec for DateOnly {
    type Value = NaiveDate;
    const SHAPE: &'static str = "date (yyyy-MM-dd)";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        let literal = match raw {
            Value::Null => return Err(CodecError::NullOrEmpty { shape: Self::SHAPE }),
            Value::String(s) if s.trim().is_empty() => {
                return Err(CodecError::NullOrEmpty { shape: Self::SHAPE })
            }
            Value::String(s) => s.as_str(),
            other => return Err(CodecError::malformed(other, Self::SHAPE)),
        };

        let segments: Vec<u32> = literal
            .split('-')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                segment.parse().ok()
            })
            .collect::<Option<_>>()
            .ok_or_else(|| CodecError::malformed(raw, Self::SHAPE))?;

        match segments.as_slice() {
            [year, month, day] => i32::try_from(*year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, *month, *day))
                .ok_or_else(|| CodecError::malformed(raw, Self::SHAPE)),
            _ => Err(CodecError::malformed(raw, Self::SHAPE)),
        }
    }

    fn encode(value: &Self::Value) -> Value {
        Value::String(value.format("%Y-%m-%d").to_string())
    }
}

scalar_serde_as!(DateOnly => NaiveDate);

/// A `yyyy-MM-ddTHH:mm:ss` literal. Decode accepts an optional trailing `Z`;
/// encode always appends it.
#[derive(Debug, Clone, Copy)]
pub struct LocalTimestamp;

impl ScalarCodec for LocalTimestamp {
    type Value = DateTime<Utc>;
    const SHAPE: &'static str = "timestamp (yyyy-MM-ddTHH:mm:ss)";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        let literal = match raw {
            Value::Null => return Err(CodecError::NullOrEmpty { shape: Self::SHAPE }),
            Value::String(s) if s.trim().is_empty() => {
                return Err(CodecError::NullOrEmpty { shape: Self::SHAPE })
            }
            Value::String(s) => s.as_str(),
            other => return Err(CodecError::malformed(other, Self::SHAPE)),
        };

        let without_marker = literal.strip_suffix('Z').unwrap_or(literal);
        NaiveDateTime::parse_from_str(without_marker, LOCAL_TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| CodecError::malformed(raw, Self::SHAPE))
    }

    fn encode(value: &Self::Value) -> Value {
        Value::String(format!("{}Z", value.format(LOCAL_TIMESTAMP_FORMAT)))
    }
}

scalar_serde_as!(LocalTimestamp => DateTime<Utc>);
