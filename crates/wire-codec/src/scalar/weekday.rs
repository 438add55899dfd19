//! Day-of-week codes, `1` = Sunday through `7` = Saturday.

use super::{parse_numeral, ScalarCodec};
use crate::error::CodecError;
use chrono::Weekday;
use serde_json::Value;

/// A single day-of-week code, sent as a number or a numeral string.
#[derive(Debug, Clone, Copy)]
pub struct DayOfWeek;

impl DayOfWeek {
    fn from_code(code: i64) -> Option<Weekday> {
        match code {
            1 => Some(Weekday::Sun),
            2 => Some(Weekday::Mon),
            3 => Some(Weekday::Tue),
            4 => Some(Weekday::Wed),
            5 => Some(Weekday::Thu),
            6 => Some(Weekday::Fri),
            7 => Some(Weekday::Sat),
            _ => None,
        }
    }

    fn parse_literal(literal: &str) -> Option<Weekday> {
        parse_numeral(literal).and_then(Self::from_code)
    }
}

impl ScalarCodec for DayOfWeek {
    type Value = Weekday;
    const SHAPE: &'static str = "day of week (1-7)";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        let day = match raw {
            Value::Number(n) => n.as_i64().and_then(Self::from_code),
            Value::String(s) => Self::parse_literal(s),
            _ => None,
        };
        day.ok_or_else(|| CodecError::malformed(raw, Self::SHAPE))
    }

    fn encode(value: &Self::Value) -> Value {
        Value::from(value.number_from_sunday())
    }
}

scalar_serde_as!(DayOfWeek => Weekday);

/// Comma-joined day-of-week codes, e.g. `"1,3,5"`. `null` decodes to an
/// empty list.
#[derive(Debug, Clone, Copy)]
pub struct WeekdayList;

impl ScalarCodec for WeekdayList {
    type Value = Vec<Weekday>;
    const SHAPE: &'static str = "comma-separated days of week";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        match raw {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => s
                .split(',')
                .filter(|segment| !segment.is_empty())
                .map(|segment| {
                    DayOfWeek::parse_literal(segment).ok_or_else(|| CodecError::MalformedScalar {
                        value: format!("{segment:?} in {s:?}"),
                        shape: Self::SHAPE,
                    })
                })
                .collect(),
            Value::Number(_) => DayOfWeek::decode(raw).map(|day| vec![day]),
            other => Err(CodecError::malformed(other, Self::SHAPE)),
        }
    }

    fn encode(value: &Self::Value) -> Value {
        let joined = value
            .iter()
            .map(|day| day.number_from_sunday().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Value::String(joined)
    }
}

scalar_serde_as!(WeekdayList => Vec<Weekday>);
