//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. The webhook
//! secret token issued by the conferencing platform is the one value every
//! receiver holds that must never reach a log line, so it travels through
//! configuration and the router as a `SecretString`.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct Endpoint {
//!     url: String,
//!     secret_token: SecretString, // Debug shows "[REDACTED]"
//! }
//!
//! let endpoint = Endpoint {
//!     url: "https://hooks.example.com/zoom".to_string(),
//!     secret_token: SecretString::from("webhook-secret"),
//! };
//!
//! assert!(!format!("{endpoint:?}").contains("webhook-secret"));
//!
//! // Signing code must opt in explicitly.
//! let key_material: &str = endpoint.secret_token.expose_secret();
//! assert_eq!(key_material, "webhook-secret");
//! ```

pub use secrecy::{ExposeSecret, SecretString};
