//! Generic object mapper.
//!
//! Field tables come from `serde` derive on each modeled type: the wire name
//! is `#[serde(rename)]`, a scalar override is `#[serde_as(as = "...")]` and
//! an ignored field is `#[serde(skip)]`. Modeled types carry
//! `#[serde(default)]`, so unrecognized wire fields are ignored and unset
//! fields stay at `Default`.
//!
//! This module adds what derive does not do on its own: `null` handling on
//! decode and the bottom-up pruning of empty nested objects on encode.

use crate::document::RawDocument;
use crate::error::CodecError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::any::type_name;

/// Decode a JSON value as `T`.
///
/// `null` decodes to `None`; an empty object decodes to a defaulted `T`.
///
/// # Errors
///
/// - `CodecError::MalformedScalar` if the input is neither an object nor `null`
/// - `CodecError::Entity` if a field fails to map (the nested scalar or union
///   message is carried as the source)
pub fn decode<T: DeserializeOwned>(raw: &Value) -> Result<Option<T>, CodecError> {
    match raw {
        Value::Null => Ok(None),
        Value::Object(_) => T::deserialize(raw)
            .map(Some)
            .map_err(|source| CodecError::Entity {
                target: type_name::<T>(),
                source,
            }),
        other => Err(CodecError::malformed(other, type_name::<T>())),
    }
}

/// Decode a JSON value as `T`, treating `null` as a missing value.
///
/// # Errors
///
/// As [`decode`], plus `CodecError::NullOrEmpty` for `null` input.
pub fn decode_required<T: DeserializeOwned>(raw: &Value) -> Result<T, CodecError> {
    decode(raw)?.ok_or(CodecError::NullOrEmpty {
        shape: type_name::<T>(),
    })
}

/// Decode an optional JSON value, defaulting when it is absent or `null`.
///
/// Used for event payloads, which the platform sometimes omits entirely.
///
/// # Errors
///
/// As [`decode`].
pub fn decode_or_default<T: DeserializeOwned + Default>(
    raw: Option<&Value>,
) -> Result<T, CodecError> {
    match raw {
        Some(value) => Ok(decode(value)?.unwrap_or_default()),
        None => Ok(T::default()),
    }
}

/// Decode a buffered document as `T`.
///
/// # Errors
///
/// As [`decode`].
pub fn decode_document<T: DeserializeOwned>(
    document: &RawDocument,
) -> Result<Option<T>, CodecError> {
    decode(document.root())
}

/// Encode `value` and prune every nested object left without fields.
///
/// A fully-defaulted entity encodes to `{}`.
///
/// # Errors
///
/// Returns `CodecError::Entity` if serialization fails (e.g. a map with
/// non-string keys).
pub fn encode<T: Serialize>(value: &T) -> Result<Value, CodecError> {
    let mut encoded = serde_json::to_value(value).map_err(|source| CodecError::Entity {
        target: type_name::<T>(),
        source,
    })?;
    prune_empty_objects(&mut encoded);
    Ok(encoded)
}

/// Remove, bottom-up, every object-valued field whose object is empty.
///
/// Children are cleaned first so that a parent emptied by the cleaning is
/// removed in turn. Arrays are walked, but their elements are never removed.
/// The root itself is kept even if it ends up empty.
pub fn prune_empty_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                prune_empty_objects(child);
            }
            map.retain(|_, child| !matches!(child, Value::Object(inner) if inner.is_empty()));
        }
        Value::Array(items) => items.iter_mut().for_each(prune_empty_objects),
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::scalar::{DateOnly, TolerantBool};
    use chrono::NaiveDate;
    use serde::Deserialize;
    use serde_json::json;
    use serde_with::{serde_as, skip_serializing_none};

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Branding {
        color: Option<String>,
        logo: Option<String>,
    }

    #[serde_as]
    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Room {
        name: Option<String>,
        #[serde_as(as = "Option<TolerantBool>")]
        locked: Option<bool>,
        #[serde_as(as = "Option<DateOnly>")]
        opened: Option<NaiveDate>,
        branding: Branding,
        #[serde(rename = "nested_branding")]
        extra: Option<Branding>,
        #[serde(skip)]
        cached_score: u32,
    }

    // ---- decode ----

    #[test]
    fn test_decode_null_is_none() {
        assert_eq!(decode::<Room>(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_decode_empty_object_is_default() {
        assert_eq!(decode::<Room>(&json!({})).unwrap(), Some(Room::default()));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let room: Room = decode(&json!({"name": "Aurora", "capacity": 12}))
            .unwrap()
            .unwrap();
        assert_eq!(room.name.as_deref(), Some("Aurora"));
    }

    #[test]
    fn test_decode_applies_field_overrides() {
        let room: Room = decode(&json!({"locked": 1, "opened": "2024-03-01"}))
            .unwrap()
            .unwrap();

        assert_eq!(room.locked, Some(true));
        assert_eq!(room.opened, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_decode_ignored_field_is_never_read() {
        let room: Room = decode(&json!({"cached_score": 99})).unwrap().unwrap();
        assert_eq!(room.cached_score, 0);
    }

    #[test]
    fn test_decode_field_failure_carries_scalar_message() {
        let err = decode::<Room>(&json!({"opened": "2024-3"})).unwrap_err();

        assert!(matches!(err, CodecError::Entity { .. }));
        assert!(err.to_string().contains("2024-3"));
    }

    #[test]
    fn test_decode_non_object_is_malformed() {
        let err = decode::<Room>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, CodecError::MalformedScalar { .. }));
    }

    #[test]
    fn test_decode_required_rejects_null() {
        assert!(matches!(
            decode_required::<Room>(&Value::Null),
            Err(CodecError::NullOrEmpty { .. })
        ));
    }

    #[test]
    fn test_decode_or_default_missing() {
        assert_eq!(decode_or_default::<Room>(None).unwrap(), Room::default());
        assert_eq!(
            decode_or_default::<Room>(Some(&Value::Null)).unwrap(),
            Room::default()
        );
    }

    #[test]
    fn test_decode_document() {
        let doc = RawDocument::parse(r#"{"name": "Lobby"}"#).unwrap();
        let room: Room = decode_document(&doc).unwrap().unwrap();
        assert_eq!(room.name.as_deref(), Some("Lobby"));
    }

    // ---- encode ----

    #[test]
    fn test_encode_default_entity_is_empty_object() {
        assert_eq!(encode(&Room::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_encode_keeps_populated_nested_objects() {
        let room = Room {
            name: Some("Aurora".to_string()),
            branding: Branding {
                color: Some("#112233".to_string()),
                logo: None,
            },
            ..Room::default()
        };

        assert_eq!(
            encode(&room).unwrap(),
            json!({"name": "Aurora", "branding": {"color": "#112233"}})
        );
    }

    #[test]
    fn test_encode_uses_field_overrides() {
        let room = Room {
            locked: Some(false),
            opened: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Room::default()
        };

        assert_eq!(
            encode(&room).unwrap(),
            json!({"locked": false, "opened": "2024-12-31"})
        );
    }

    // ---- prune_empty_objects ----

    #[test]
    fn test_prune_is_bottom_up() {
        let mut value = json!({"a": {"b": {"c": {}}}, "keep": 1});
        prune_empty_objects(&mut value);
        assert_eq!(value, json!({"keep": 1}));
    }

    #[test]
    fn test_prune_never_removes_array_elements() {
        let mut value = json!({"items": [{}, {"x": {}}, 3]});
        prune_empty_objects(&mut value);
        assert_eq!(value, json!({"items": [{}, {}, 3]}));
    }

    #[test]
    fn test_prune_keeps_empty_arrays_and_nulls() {
        let mut value = json!({"list": [], "nothing": null});
        prune_empty_objects(&mut value);
        assert_eq!(value, json!({"list": [], "nothing": null}));
    }
}
