//! Discriminated unions.
//!
//! A union is resolved by peeking its discriminator in a buffered
//! [`RawDocument`], looking the value up in a static table, and decoding the
//! same buffered document as the mapped concrete type.
//!
//! Unions are a closed set owned by this crate, so an unmapped discriminator
//! is a hard failure by default. Webhook event types are the opposite case
//! and are handled by the router's soft-fail registry instead.

use crate::document::RawDocument;
use crate::error::CodecError;
use crate::scalar::parse_numeral;
use serde::de::DeserializeOwned;
use serde::Deserializer;
use serde_json::Value;

/// Decode a buffered document into the union type `T`.
pub type DecodeFn<T> = fn(&RawDocument) -> Result<T, CodecError>;

/// A discriminator value in a union table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminant {
    /// Integer code. Also matches a numeral string (`"2"` matches `2`).
    Code(i64),
    /// Exact string value.
    Name(&'static str),
}

impl Discriminant {
    /// Whether `raw` selects this entry.
    #[must_use]
    pub fn matches(&self, raw: &Value) -> bool {
        match (self, raw) {
            (Discriminant::Code(code), Value::Number(n)) => n.as_i64() == Some(*code),
            (Discriminant::Code(code), Value::String(s)) => parse_numeral(s) == Some(*code),
            (Discriminant::Name(name), Value::String(s)) => s == name,
            _ => false,
        }
    }
}

/// What to do with a discriminator value that has no table entry.
#[derive(Debug)]
pub enum UnmappedPolicy<T: 'static> {
    /// Raise `CodecError::UnknownDiscriminator`.
    Fail,
    /// Decode with the given fallback instead.
    Fallback(DecodeFn<T>),
}

/// Static resolution table for one union type.
#[derive(Debug)]
pub struct DiscriminatorRule<T: 'static> {
    /// Union name used in error messages.
    pub union: &'static str,
    /// Object-key path of the discriminator field.
    pub path: &'static [&'static str],
    /// Discriminator value to concrete decoder.
    pub variants: &'static [(Discriminant, DecodeFn<T>)],
    /// Handling of values missing from `variants`.
    pub unmapped: UnmappedPolicy<T>,
}

impl<T: 'static> DiscriminatorRule<T> {
    /// Resolve and decode a buffered document.
    ///
    /// # Errors
    ///
    /// - `CodecError::MissingField` if the discriminator is absent or `null`
    /// - `CodecError::UnknownDiscriminator` if the value is unmapped and the
    ///   policy is `Fail`
    /// - whatever the concrete decoder raises
    pub fn decode(&self, document: &RawDocument) -> Result<T, CodecError> {
        let raw = document
            .peek(self.path)
            .filter(|value| !value.is_null())
            .ok_or_else(|| CodecError::MissingField {
                field: self.path.join("."),
                target: self.union,
            })?;

        let found = self
            .variants
            .iter()
            .find(|(discriminant, _)| discriminant.matches(raw))
            .map(|(_, decode)| *decode);

        let decode = match (found, &self.unmapped) {
            (Some(decode), _) => decode,
            (None, UnmappedPolicy::Fallback(fallback)) => *fallback,
            (None, UnmappedPolicy::Fail) => {
                tracing::debug!(
                    target: "wire_codec.union",
                    union = self.union,
                    discriminator = %raw,
                    "Unmapped discriminator"
                );
                return Err(CodecError::unknown_discriminator(raw, self.union));
            }
        };

        decode(document)
    }

    /// Resolve and decode a JSON value.
    ///
    /// # Errors
    ///
    /// As [`DiscriminatorRule::decode`].
    pub fn decode_value(&self, raw: Value) -> Result<T, CodecError> {
        self.decode(&RawDocument::from_value(raw))
    }

    /// `serde::Deserialize` body for a union type.
    ///
    /// # Errors
    ///
    /// Resolution failures are reported through `D::Error::custom`.
    pub fn deserialize<'de, D>(&self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        self.decode_value(raw).map_err(serde::de::Error::custom)
    }
}

/// Decode a document as `C` and wrap it into the union with `wrap`.
///
/// Used to build `DecodeFn` entries:
/// `|doc| variant(doc, Meeting::Scheduled)`.
///
/// # Errors
///
/// Returns `CodecError::Entity` if the document does not map onto `C`.
pub fn variant<C, T>(document: &RawDocument, wrap: fn(C) -> T) -> Result<T, CodecError>
where
    C: DeserializeOwned,
{
    document.decode_as::<C>().map(wrap)
}
