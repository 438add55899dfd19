//! Endpoint ownership validation.
//!
//! When an endpoint is registered, and periodically afterwards, the platform
//! sends an `endpoint.url_validation` event carrying a random `plainToken`.
//! The endpoint proves it holds the shared secret by answering with the
//! token and its HMAC-SHA256 under that secret:
//!
//! ```json
//! { "plainToken": "qgg8vlvZRS6UYooatFL8Aw", "encryptedToken": "<lowercase hex>" }
//! ```

use common::secret::{ExposeSecret, SecretString};
use ring::hmac;
use serde::{Deserialize, Serialize};

/// Event type of the validation challenge.
pub const URL_VALIDATION_EVENT: &str = "endpoint.url_validation";

/// Response body for a validation challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    /// The challenge token, echoed verbatim.
    pub plain_token: String,

    /// Lowercase hex HMAC-SHA256 of `plain_token` under the shared secret.
    pub encrypted_token: String,
}

/// Build the response to a validation challenge.
#[must_use]
pub fn validation_response(plain_token: &str, secret: &SecretString) -> ValidationResponse {
    ValidationResponse {
        plain_token: plain_token.to_string(),
        encrypted_token: hmac_sha256_hex(secret, plain_token.as_bytes()),
    }
}

/// Lowercase hex HMAC-SHA256 of `message` under `secret`.
pub(crate) fn hmac_sha256_hex(secret: &SecretString, message: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret().as_bytes());
    hex::encode(hmac::sign(&key, message).as_ref())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "test-webhook-secret-do-not-use";
    const TOKEN: &str = "qgg8vlvZRS6UYooatFL8Aw";
    const EXPECTED: &str = "db39f022d0d1c89f776703f2103d9e5c7ec77fa15c0737127dfe8c57f7d77d1e";

    #[test]
    fn test_pinned_digest() {
        let response = validation_response(TOKEN, &SecretString::from(SECRET));

        assert_eq!(response.plain_token, TOKEN);
        assert_eq!(response.encrypted_token, EXPECTED);
    }

    #[test]
    fn test_wire_shape() {
        let response = validation_response(TOKEN, &SecretString::from(SECRET));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"plainToken": TOKEN, "encryptedToken": EXPECTED})
        );
    }

    #[test]
    fn test_digest_depends_on_secret() {
        let a = validation_response(TOKEN, &SecretString::from("one"));
        let b = validation_response(TOKEN, &SecretString::from("two"));
        assert_ne!(a.encrypted_token, b.encrypted_token);
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let response = validation_response("", &SecretString::from(SECRET));

        assert_eq!(response.encrypted_token.len(), 64);
        assert!(response
            .encrypted_token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
