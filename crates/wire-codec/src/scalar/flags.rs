//! Flag sequences sent as text, e.g. `"Windows + Phone"`.
//!
//! This is not a bitmask: the platform joins flag names with the literal
//! `" + "` separator.

use super::ScalarCodec;
use crate::error::CodecError;
use serde_json::Value;
use std::marker::PhantomData;

/// Separator between flag names.
pub const FLAG_SEPARATOR: &str = " + ";

/// An enumerated flag with a fixed wire name.
pub trait Flag: Sized + Copy {
    /// Resolve a wire token to a flag.
    fn from_wire(token: &str) -> Option<Self>;

    /// The wire name of this flag.
    fn as_wire(&self) -> &'static str;
}

/// A `" + "`-joined sequence of flags. `null` and `""` decode to an empty
/// sequence; an unrecognised token fails the whole conversion.
#[derive(Debug, Clone, Copy)]
pub struct FlagSet<F>(PhantomData<F>);

impl<F: Flag> ScalarCodec for FlagSet<F> {
    type Value = Vec<F>;
    const SHAPE: &'static str = "flag sequence";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        let text = match raw {
            Value::Null => return Ok(Vec::new()),
            Value::String(s) => s,
            other => return Err(CodecError::malformed(other, Self::SHAPE)),
        };

        text.split(FLAG_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                F::from_wire(token).ok_or_else(|| CodecError::MalformedScalar {
                    value: format!("{token:?} in {text:?}"),
                    shape: Self::SHAPE,
                })
            })
            .collect()
    }

    fn encode(value: &Self::Value) -> Value {
        let joined = value
            .iter()
            .map(Flag::as_wire)
            .collect::<Vec<_>>()
            .join(FLAG_SEPARATOR);
        Value::String(joined)
    }
}

impl<F: Flag> serde_with::SerializeAs<Vec<F>> for FlagSet<F> {
    fn serialize_as<S>(value: &Vec<F>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Self::encode(value), serializer)
    }
}

impl<'de, F: Flag> serde_with::DeserializeAs<'de, Vec<F>> for FlagSet<F> {
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<F>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}
