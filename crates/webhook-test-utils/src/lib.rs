//! # Webhook Test Utilities
//!
//! Shared test utilities for the webhook codec and router.
//!
//! This crate provides:
//! - Fixed test constants (secret, tokens, IDs, timestamps)
//! - Envelope builder (`EnvelopeBuilder`)
//! - JSON fixture payloads and signed deliveries
//! - Custom assertions (`EventAssertions` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webhook_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let body = EnvelopeBuilder::new("meeting.started")
//!         .with_object(fixtures::scheduled_meeting())
//!         .to_body();
//!
//!     let webhook = test_router().decode(&body).unwrap();
//!     webhook.assert_event_type("meeting.started").assert_known();
//! }
//! ```

pub mod assertions;
pub mod envelope_builder;
pub mod fixtures;
pub mod test_ids;

// Re-export commonly used items
pub use assertions::*;
pub use envelope_builder::*;
pub use test_ids::*;

use common::secret::SecretString;
use webhook_router::{EventRegistry, EventRouter};

/// Router over the shared standard registry.
pub fn test_router() -> EventRouter<'static> {
    EventRouter::new(EventRegistry::shared())
}

/// The fixed test secret as a `SecretString`.
pub fn test_secret() -> SecretString {
    SecretString::from(TEST_SECRET_TOKEN)
}
