use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted when `RUST_LOG` is not set.
pub const LOG_ENV: &str = "FLIGHT_NETWORK_LOG";

/// Builds the filter: `RUST_LOG`, then `FLIGHT_NETWORK_LOG`, then `level`.
/// A bare level such as `debug` is scoped to this crate.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("flight_network={level}")
            })
        })
}

/// Initialize structured logging to stderr, or to `log_file` when given.
pub fn init_tracing(
    level: &str,
    log_json: bool,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(env_filter(level));

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
