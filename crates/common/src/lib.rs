//! Common utilities shared across the webhook crates.

#![warn(clippy::pedantic)]

/// Module for webhook receiver configuration
pub mod config;

/// Module for secret types that prevent accidental logging
pub mod secret;
