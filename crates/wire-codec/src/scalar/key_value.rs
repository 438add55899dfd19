//! Key/value pair arrays with configurable field names.
//!
//! The platform uses the same two-field array shape under several different
//! name pairs (`{title,value}` for registration questions, `{field,value}`
//! for tracking fields, `{id,name}` for feedback details, ...). The name
//! pair is contract-significant, so each is a marker type implementing
//! [`KeyValueNames`] and the codec is [`KeyValueList<N>`].
//!
//! Decoding is lenient per element: an entry whose primary field is missing
//! or empty is dropped and the rest of the array survives. A missing
//! secondary field becomes an empty string.

use super::ScalarCodec;
use crate::error::CodecError;
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// Wire names of the two fields of a key/value entry.
pub trait KeyValueNames {
    /// Field holding the key. Entries without it are dropped.
    const PRIMARY: &'static str;
    /// Field holding the value. Defaults to `""` when absent.
    const SECONDARY: &'static str;
}

macro_rules! key_value_names {
    ($(#[$meta:meta])* $name:ident { $primary:literal, $secondary:literal }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl KeyValueNames for $name {
            const PRIMARY: &'static str = $primary;
            const SECONDARY: &'static str = $secondary;
        }
    };
}

key_value_names!(
    /// `{ "title": .., "value": .. }`: registration custom questions.
    TitleValue { "title", "value" }
);
key_value_names!(
    /// `{ "key": .., "value": .. }`: user custom attributes.
    KeyValue { "key", "value" }
);
key_value_names!(
    /// `{ "field": .., "value": .. }`: meeting tracking fields.
    FieldValue { "field", "value" }
);
key_value_names!(
    /// `{ "id": .., "name": .. }`: feedback details, channel members.
    IdName { "id", "name" }
);
key_value_names!(
    /// `{ "title": .., "answer": .. }`: survey answers.
    TitleAnswer { "title", "answer" }
);

/// One decoded entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValuePair {
    /// Value of the primary field.
    pub key: String,
    /// Value of the secondary field, `""` when it was absent.
    pub value: String,
}

impl KeyValuePair {
    /// Create a pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Key/value array codec parameterised by its field names.
#[derive(Debug, Clone, Copy)]
pub struct KeyValueList<N>(PhantomData<N>);

/// Scalar text of a field, or `None` for absent/null/structured values.
fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl<N: KeyValueNames> ScalarCodec for KeyValueList<N> {
    type Value = Vec<KeyValuePair>;
    const SHAPE: &'static str = "key/value array";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        let Value::Array(items) = raw else {
            return Err(CodecError::malformed(raw, Self::SHAPE));
        };

        let pairs = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let key = text_of(item.get(N::PRIMARY)).filter(|key| !key.is_empty());
                let Some(key) = key else {
                    tracing::debug!(
                        target: "wire_codec.scalar",
                        index,
                        primary = N::PRIMARY,
                        "Dropping key/value entry without primary field"
                    );
                    return None;
                };
                let value = text_of(item.get(N::SECONDARY)).unwrap_or_default();
                Some(KeyValuePair { key, value })
            })
            .collect();

        Ok(pairs)
    }

    fn encode(value: &Self::Value) -> Value {
        Value::Array(
            value
                .iter()
                .map(|pair| {
                    let mut entry = Map::with_capacity(2);
                    entry.insert(N::PRIMARY.to_string(), Value::String(pair.key.clone()));
                    entry.insert(N::SECONDARY.to_string(), Value::String(pair.value.clone()));
                    Value::Object(entry)
                })
                .collect(),
        )
    }
}

impl<N: KeyValueNames> serde_with::SerializeAs<Vec<KeyValuePair>> for KeyValueList<N> {
    fn serialize_as<S>(value: &Vec<KeyValuePair>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Self::encode(value), serializer)
    }
}

impl<'de, N: KeyValueNames> serde_with::DeserializeAs<'de, Vec<KeyValuePair>>
    for KeyValueList<N>
{
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<KeyValuePair>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}
