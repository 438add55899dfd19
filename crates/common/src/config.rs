//! Webhook receiver configuration shared by the router and the CLI.
//!
//! Configuration is loaded from environment variables. The shared secret
//! is redacted in Debug output.

use crate::secret::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the webhook secret token.
pub const SECRET_TOKEN_VAR: &str = "WEBHOOK_SECRET_TOKEN";

/// Environment variable selecting the envelope timestamp precision.
pub const TIMESTAMP_PRECISION_VAR: &str = "WEBHOOK_TIMESTAMP_PRECISION";

/// Environment variable bounding how old a signed delivery may be.
pub const MAX_SIGNATURE_AGE_VAR: &str = "WEBHOOK_MAX_SIGNATURE_AGE_SECONDS";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "WEBHOOK_LOG_FORMAT";

/// Default freshness window for signed deliveries (5 minutes).
pub const DEFAULT_MAX_SIGNATURE_AGE_SECONDS: u64 = 300;

/// Unit of the envelope `event_ts` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    /// Whole seconds since the Unix epoch.
    #[default]
    Seconds,
    /// Milliseconds since the Unix epoch.
    Milliseconds,
}

impl FromStr for TimestampPrecision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seconds" | "s" => Ok(Self::Seconds),
            "milliseconds" | "ms" => Ok(Self::Milliseconds),
            other => Err(ConfigError::InvalidValue(format!(
                "{TIMESTAMP_PRECISION_VAR}={other} (expected seconds or milliseconds)"
            ))),
        }
    }
}

/// Log output format for binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "{LOG_FORMAT_VAR}={other} (expected text or json)"
            ))),
        }
    }
}

/// Webhook receiver configuration.
#[derive(Clone)]
pub struct WebhookConfig {
    /// Secret token issued by the platform for this endpoint.
    /// Protected by `SecretString` to prevent accidental logging.
    pub secret_token: SecretString,

    /// Unit of the envelope timestamp (default: seconds).
    pub timestamp_precision: TimestampPrecision,

    /// Maximum age of a signed delivery in seconds (default: 300).
    pub max_signature_age_seconds: u64,

    /// Log output format (default: text).
    pub log_format: LogFormat,
}

/// Custom Debug implementation that redacts the secret token.
impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret_token", &"[REDACTED]")
            .field("timestamp_precision", &self.timestamp_precision)
            .field("max_signature_age_seconds", &self.max_signature_age_seconds)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl WebhookConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the secret is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the secret is missing or a value cannot be parsed.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let secret_token = vars
            .get(SECRET_TOKEN_VAR)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(SECRET_TOKEN_VAR.to_string()))?;
        let secret_token = SecretString::from(secret_token.clone());

        let timestamp_precision = vars
            .get(TIMESTAMP_PRECISION_VAR)
            .map(|s| s.parse::<TimestampPrecision>())
            .transpose()?
            .unwrap_or_default();

        let max_signature_age_seconds = match vars.get(MAX_SIGNATURE_AGE_VAR) {
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("{MAX_SIGNATURE_AGE_VAR}={raw}"))
            })?,
            None => DEFAULT_MAX_SIGNATURE_AGE_SECONDS,
        };

        let log_format = vars
            .get(LOG_FORMAT_VAR)
            .map(|s| s.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        tracing::debug!(
            target: "common.config",
            ?timestamp_precision,
            max_signature_age_seconds,
            ?log_format,
            "Loaded webhook configuration"
        );

        Ok(WebhookConfig {
            secret_token,
            timestamp_precision,
            max_signature_age_seconds,
            log_format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::secret::ExposeSecret;

    fn base_vars() -> HashMap<String, String> {
        HashMap::from([(
            SECRET_TOKEN_VAR.to_string(),
            "test-webhook-secret-do-not-use".to_string(),
        )])
    }

    #[test]
    fn test_from_vars_success_with_defaults() {
        let config = WebhookConfig::from_vars(&base_vars()).expect("Config should load");

        assert_eq!(
            config.secret_token.expose_secret(),
            "test-webhook-secret-do-not-use"
        );
        assert_eq!(config.timestamp_precision, TimestampPrecision::Seconds);
        assert_eq!(
            config.max_signature_age_seconds,
            DEFAULT_MAX_SIGNATURE_AGE_SECONDS
        );
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_from_vars_success_with_custom_values() {
        let mut vars = base_vars();
        vars.insert(TIMESTAMP_PRECISION_VAR.to_string(), "milliseconds".to_string());
        vars.insert(MAX_SIGNATURE_AGE_VAR.to_string(), "60".to_string());
        vars.insert(LOG_FORMAT_VAR.to_string(), "JSON".to_string());

        let config = WebhookConfig::from_vars(&vars).expect("Config should load");

        assert_eq!(config.timestamp_precision, TimestampPrecision::Milliseconds);
        assert_eq!(config.max_signature_age_seconds, 60);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_from_vars_missing_secret() {
        let result = WebhookConfig::from_vars(&HashMap::new());
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == SECRET_TOKEN_VAR));
    }

    #[test]
    fn test_from_vars_empty_secret_is_missing() {
        let mut vars = base_vars();
        vars.insert(SECRET_TOKEN_VAR.to_string(), String::new());

        let result = WebhookConfig::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_from_vars_invalid_precision() {
        let mut vars = base_vars();
        vars.insert(TIMESTAMP_PRECISION_VAR.to_string(), "fortnights".to_string());

        let result = WebhookConfig::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidValue(v)) if v.contains("fortnights")));
    }

    #[test]
    fn test_from_vars_invalid_signature_age() {
        let mut vars = base_vars();
        vars.insert(MAX_SIGNATURE_AGE_VAR.to_string(), "-5".to_string());

        let result = WebhookConfig::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = WebhookConfig::from_vars(&base_vars()).unwrap();
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("test-webhook-secret"));
    }
}
