//! Request signature verification.
//!
//! Every delivery carries two headers:
//!
//! - `x-zm-request-timestamp`: epoch seconds at which the request was signed
//! - `x-zm-signature`: `v0=` followed by the lowercase hex
//!   HMAC-SHA256 of `v0:{timestamp}:{body}` under the endpoint's secret token
//!
//! Verification is constant-time (`ring::hmac::verify`) and happens before
//! the body is parsed.

use crate::challenge::hmac_sha256_hex;
use crate::error::RouterError;
use chrono::{DateTime, Utc};
use common::secret::{ExposeSecret, SecretString};
use ring::hmac;

/// Header carrying the signature.
pub const SIGNATURE_HEADER: &str = "x-zm-signature";

/// Header carrying the signing timestamp.
pub const TIMESTAMP_HEADER: &str = "x-zm-request-timestamp";

/// Version prefix of the signature scheme.
pub const SIGNATURE_VERSION: &str = "v0";

fn signed_message(timestamp: &str, body: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(SIGNATURE_VERSION.len() + timestamp.len() + body.len() + 2);
    message.extend_from_slice(SIGNATURE_VERSION.as_bytes());
    message.push(b':');
    message.extend_from_slice(timestamp.as_bytes());
    message.push(b':');
    message.extend_from_slice(body);
    message
}

/// Compute the `x-zm-signature` header value for a body.
#[must_use]
pub fn compute_signature(secret: &SecretString, timestamp: &str, body: &[u8]) -> String {
    format!(
        "{SIGNATURE_VERSION}={}",
        hmac_sha256_hex(secret, &signed_message(timestamp, body))
    )
}

/// Verify an `x-zm-signature` header value against a body.
///
/// # Errors
///
/// Returns `RouterError::InvalidSignature` if the header is malformed or the
/// digest does not match.
pub fn verify_signature(
    secret: &SecretString,
    timestamp: &str,
    body: &[u8],
    signature: &str,
) -> Result<(), RouterError> {
    let digest = signature
        .strip_prefix(SIGNATURE_VERSION)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| {
            tracing::debug!(target: "webhook_router.signature", "Unsupported signature format");
            RouterError::InvalidSignature
        })?;

    let tag = hex::decode(digest).map_err(|e| {
        tracing::debug!(target: "webhook_router.signature", error = %e, "Signature is not hex");
        RouterError::InvalidSignature
    })?;

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret().as_bytes());
    hmac::verify(&key, &signed_message(timestamp, body), &tag).map_err(|_| {
        tracing::debug!(target: "webhook_router.signature", "Signature mismatch");
        RouterError::InvalidSignature
    })
}

/// Check that a signing timestamp is within `max_age_seconds` of `now`.
///
/// Timestamps in the future are accepted within the same window to absorb
/// clock skew.
///
/// # Errors
///
/// Returns `RouterError::StaleTimestamp` if the timestamp is not an integer
/// or lies outside the window.
pub fn check_freshness_at(
    timestamp: &str,
    max_age_seconds: u64,
    now: DateTime<Utc>,
) -> Result<(), RouterError> {
    let signed_at: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| RouterError::StaleTimestamp(timestamp.to_string()))?;

    let age = now.timestamp().abs_diff(signed_at);
    if age > max_age_seconds {
        tracing::debug!(
            target: "webhook_router.signature",
            age_seconds = age,
            max_age_seconds,
            "Signed timestamp outside accepted window"
        );
        return Err(RouterError::StaleTimestamp(timestamp.to_string()));
    }

    Ok(())
}

/// [`check_freshness_at`] against the current time.
///
/// # Errors
///
/// As [`check_freshness_at`].
pub fn check_freshness(timestamp: &str, max_age_seconds: u64) -> Result<(), RouterError> {
    check_freshness_at(timestamp, max_age_seconds, Utc::now())
}
