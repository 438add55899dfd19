//! Router error types.

use thiserror::Error;
use wire_codec::CodecError;

/// Errors raised while routing a webhook delivery.
///
/// An unregistered event type is not an error: it decodes to
/// `WebhookEvent::Unknown`.
#[derive(Error, Debug)]
pub enum RouterError {
    /// The envelope or its payload failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The request signature does not match the body.
    #[error("Webhook signature is invalid")]
    InvalidSignature,

    /// The request timestamp is malformed or outside the accepted window.
    #[error("Webhook timestamp is stale or malformed: {0}")]
    StaleTimestamp(String),

    /// A challenge response was requested for some other event.
    #[error("Expected endpoint.url_validation, got {0}")]
    NotAValidationEvent(String),

    /// Two registrations share one event type.
    #[error("Event type registered twice: {0}")]
    DuplicateEventType(&'static str),
}
