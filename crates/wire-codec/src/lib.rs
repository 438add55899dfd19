//! Type-directed JSON codec for conferencing platform payloads.
//!
//! The platform's JSON is loosely typed: numeric and string discriminators,
//! booleans sent as `1`/`0`, dates in three different shapes, and key/value
//! arrays whose field names change from payload to payload. This crate turns
//! that JSON into strongly-typed domain objects and back.
//!
//! # Layers
//!
//! - [`scalar`]: pure decode/encode pairs for primitive wire shapes, usable as
//!   per-field overrides through `#[serde_as(as = "...")]`.
//! - [`entity`]: the generic object mapper. Field tables are generated at
//!   compile time by `serde` derive; this module adds the null handling and
//!   the empty-object pruning applied on encode.
//! - [`union`]: discriminated unions resolved by peeking a field of a
//!   buffered [`RawDocument`] before committing to a concrete type.
//! - [`models`]: the domain types (meetings, webinars, participants, ...).
//!
//! All tables are immutable after construction and every conversion is a
//! pure function of its input, so codecs may be called concurrently from any
//! thread.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod entity;
pub mod error;
pub mod models;
pub mod scalar;
pub mod union;

pub use document::RawDocument;
pub use error::CodecError;
