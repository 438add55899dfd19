//! hook-inspect - operator CLI for webhook deliveries
//!
//! # Examples
//!
//! ```bash
//! # Decode a captured delivery
//! hook-inspect decode delivery.json
//!
//! # Answer a validation challenge with the secret from WEBHOOK_SECRET_TOKEN
//! hook-inspect challenge qgg8vlvZRS6UYooatFL8Aw
//!
//! # Check a captured signature
//! hook-inspect verify delivery.json 1700000000 v0=42eec9ec...
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::config::{LogFormat, TimestampPrecision, LOG_FORMAT_VAR, TIMESTAMP_PRECISION_VAR};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "hook_inspect=info,webhook_router=info";

/// Decode, validate and verify conferencing platform webhook deliveries
#[derive(Parser)]
#[command(name = "hook-inspect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, env = LOG_FORMAT_VAR, default_value = "text")]
    log_format: LogFormat,

    /// Unit of the envelope `event_ts` field
    #[arg(long, global = true, env = TIMESTAMP_PRECISION_VAR, default_value = "seconds")]
    precision: TimestampPrecision,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an envelope and print the typed event
    Decode {
        /// Envelope file, or `-` for stdin
        input: PathBuf,

        /// Print the re-encoded envelope as JSON instead of the typed event
        #[arg(long)]
        json: bool,
    },

    /// Print the response to an endpoint validation challenge
    Challenge {
        /// The `plainToken` sent by the platform
        token: String,
    },

    /// Verify a delivery's signature, then decode it
    Verify {
        /// Raw request body, or `-` for stdin
        input: PathBuf,

        /// `x-zm-request-timestamp` header value
        timestamp: String,

        /// `x-zm-signature` header value
        signature: String,

        /// Accept timestamps outside the freshness window
        #[arg(long)]
        skip_freshness: bool,
    },
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays machine readable.
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Decode { input, json } => commands::decode(&input, cli.precision, json),
        Commands::Challenge { token } => commands::challenge(&token),
        Commands::Verify {
            input,
            timestamp,
            signature,
            skip_freshness,
        } => commands::verify(
            &input,
            &timestamp,
            &signature,
            cli.precision,
            skip_freshness,
        ),
    }
}
