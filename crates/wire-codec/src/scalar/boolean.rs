//! Booleans sent either as JSON booleans or as integers.

use super::ScalarCodec;
use crate::error::CodecError;
use serde_json::Value;

/// `true`/`false` pass through; the number `1` (also written `1.0`) is true
/// and every other number is false. Strings, `null`, arrays and objects fail.
#[derive(Debug, Clone, Copy)]
pub struct TolerantBool;

impl ScalarCodec for TolerantBool {
    type Value = bool;
    const SHAPE: &'static str = "boolean";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        match raw {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|f| (f - 1.0).abs() < f64::EPSILON)),
            other => Err(CodecError::malformed(other, Self::SHAPE)),
        }
    }

    fn encode(value: &Self::Value) -> Value {
        Value::Bool(*value)
    }
}

scalar_serde_as!(TolerantBool => bool);
