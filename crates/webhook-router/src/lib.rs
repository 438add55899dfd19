//! Webhook event router for conferencing platform deliveries.
//!
//! Decodes the `{ event, event_ts, payload }` envelope, dispatches on the
//! event type through an immutable [`EventRegistry`], and decodes the payload
//! into a typed [`WebhookEvent`] with the `wire_codec` models. Unregistered
//! event types are carried as [`WebhookEvent::Unknown`] rather than failing.
//!
//! Also answers endpoint validation challenges ([`challenge`]) and verifies
//! request signatures ([`signature`]).
//!
//! ```no_run
//! use webhook_router::{EventRegistry, EventRouter};
//!
//! # fn main() -> Result<(), webhook_router::RouterError> {
//! let router = EventRouter::new(EventRegistry::shared());
//! let webhook = router.decode(r#"{"event": "meeting.started", "event_ts": 1700000000}"#)?;
//! assert_eq!(webhook.event_type(), "meeting.started");
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod challenge;
pub mod error;
pub mod events;
pub mod registry;
pub mod router;
pub mod signature;

pub use challenge::{validation_response, ValidationResponse, URL_VALIDATION_EVENT};
pub use error::RouterError;
pub use events::{UnknownEvent, Webhook, WebhookEvent};
pub use registry::{EventDecodeFn, EventDescriptor, EventRegistry, RegistryBuilder};
pub use router::EventRouter;
pub use signature::{compute_signature, verify_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
