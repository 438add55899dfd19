//! Delimiter-joined string lists, e.g. `"a@example.com;b@example.com"`.

use super::ScalarCodec;
use crate::error::CodecError;
use serde_json::Value;
use std::marker::PhantomData;

/// Separator used by a [`Delimited`] list.
pub trait Delimiter {
    /// The literal separator.
    const DELIMITER: &'static str;
}

/// `,`-joined lists.
#[derive(Debug, Clone, Copy)]
pub struct Comma;

impl Delimiter for Comma {
    const DELIMITER: &'static str = ",";
}

/// `;`-joined lists.
#[derive(Debug, Clone, Copy)]
pub struct Semicolon;

impl Delimiter for Semicolon {
    const DELIMITER: &'static str = ";";
}

/// A delimiter-joined string decoded into its segments.
///
/// `null` decodes to an empty list, never to `None`. Empty segments produced
/// by consecutive delimiters are dropped.
#[derive(Debug, Clone, Copy)]
pub struct Delimited<D>(PhantomData<D>);

impl<D: Delimiter> ScalarCodec for Delimited<D> {
    type Value = Vec<String>;
    const SHAPE: &'static str = "delimited string list";

    fn decode(raw: &Value) -> Result<Self::Value, CodecError> {
        match raw {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => Ok(s
                .split(D::DELIMITER)
                .filter(|segment| !segment.is_empty())
                .map(ToString::to_string)
                .collect()),
            other => Err(CodecError::malformed(other, Self::SHAPE)),
        }
    }

    fn encode(value: &Self::Value) -> Value {
        Value::String(value.join(D::DELIMITER))
    }
}

impl<D: Delimiter> serde_with::SerializeAs<Vec<String>> for Delimited<D> {
    fn serialize_as<S>(value: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Self::encode(value), serializer)
    }
}

impl<'de, D: Delimiter> serde_with::DeserializeAs<'de, Vec<String>> for Delimited<D> {
    fn deserialize_as<De>(deserializer: De) -> Result<Vec<String>, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_splits_on_delimiter() {
        let decoded = Delimited::<Comma>::decode(&json!("US,FR,JP")).unwrap();
        assert_eq!(decoded, vec!["US", "FR", "JP"]);
    }

    #[test]
    fn test_decode_null_is_empty_not_none() {
        let decoded = Delimited::<Semicolon>::decode(&Value::Null).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_drops_empty_segments() {
        let decoded = Delimited::<Semicolon>::decode(&json!(";a@example.com;;b@example.com;"))
            .unwrap();
        assert_eq!(decoded, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_decode_empty_string_is_empty() {
        assert!(Delimited::<Comma>::decode(&json!("")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_number() {
        assert!(matches!(
            Delimited::<Comma>::decode(&json!(12)),
            Err(CodecError::MalformedScalar { .. })
        ));
    }

    #[test]
    fn test_encode_joins() {
        let value = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Delimited::<Semicolon>::encode(&value), json!("a;b"));
    }
}
