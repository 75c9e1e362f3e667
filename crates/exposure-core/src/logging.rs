//! Subscriber setup for programs that read simulation tables.
//!
//! The exposure crates only emit `tracing` events:
//!
//! - `warn`: column ownership mismatches in cross-sections
//! - `info`: table load summaries
//! - `debug`: index construction, table reads, profile cache fills

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, util::SubscriberInitExt};

const CRATE_TARGETS: [&str; 3] = ["exposure_core", "exposure_ingest", "exposure_model"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Filter directive enabling `level` for the exposure crates and `warn`
/// for everything else.
pub fn default_directive(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    std::iter::once("warn".to_string())
        .chain(CRATE_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber writing to stderr.
pub fn init_logging(level: Level, format: LogFormat) -> io::Result<()> {
    init_logging_with_writer(level, format, io::stderr)
}

/// Install the global subscriber writing to `writer`.
///
/// `RUST_LOG` replaces [`default_directive`] when set. Fails if a global
/// subscriber is already installed.
pub fn init_logging_with_writer<W>(level: Level, format: LogFormat, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let result = match format {
        LogFormat::Text => builder.with_target(true).finish().try_init(),
        LogFormat::Json => builder.json().finish().try_init(),
    };
    result.map_err(io::Error::other)
}
