//! Subcommand implementations.

use anyhow::{Context, Result};
use common::config::{TimestampPrecision, WebhookConfig};
use std::io::Read;
use std::path::Path;
use tracing::{error, info, warn};
use webhook_router::{
    validation_response, verify_signature, EventRegistry, EventRouter, Webhook,
};

/// Read a file, or stdin when the path is `-`.
fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("Failed to read stdin")?;
        return Ok(body);
    }

    std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn load_config() -> Result<WebhookConfig> {
    WebhookConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e.into()
    })
}

fn print_webhook(router: &EventRouter<'_>, webhook: &Webhook, as_json: bool) -> Result<()> {
    if webhook.event.is_unknown() {
        warn!(event_type = webhook.event_type(), "Event type is not registered");
    }

    if as_json {
        let envelope = router.encode(webhook)?;
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{webhook:#?}");
    }
    Ok(())
}

pub fn decode(input: &Path, precision: TimestampPrecision, as_json: bool) -> Result<()> {
    let body = read_input(input)?;
    let router =
        EventRouter::new(EventRegistry::shared()).with_timestamp_precision(precision);

    let webhook = router
        .decode_slice(&body)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    info!(
        event_type = webhook.event_type(),
        event_ts = %webhook.timestamp,
        "Decoded delivery"
    );
    print_webhook(&router, &webhook, as_json)
}

pub fn challenge(token: &str) -> Result<()> {
    let config = load_config()?;
    let response = validation_response(token, &config.secret_token);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

pub fn verify(
    input: &Path,
    timestamp: &str,
    signature: &str,
    precision: TimestampPrecision,
    skip_freshness: bool,
) -> Result<()> {
    let config = load_config()?;
    let body = read_input(input)?;
    let router = EventRouter::from_config(EventRegistry::shared(), &config)
        .with_timestamp_precision(precision);

    let webhook = if skip_freshness {
        verify_signature(&config.secret_token, timestamp, &body, signature)?;
        router.decode_slice(&body)?
    } else {
        router.verify_and_decode(&body, timestamp, signature, &config.secret_token)?
    };

    info!(event_type = webhook.event_type(), "Signature verified");
    print_webhook(&router, &webhook, false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_reports_missing_file() {
        let err = read_input(Path::new("/nonexistent/delivery.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/delivery.json"));
    }

    #[test]
    fn test_read_input_reads_file() {
        let path = std::env::temp_dir().join("hook-inspect-read-input-test.json");
        std::fs::write(&path, br#"{"event":"meeting.started"}"#).unwrap();

        let body = read_input(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(body, br#"{"event":"meeting.started"}"#);
    }
}
