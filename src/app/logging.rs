//! Logging Setup
//!
//! All log output goes to stderr. Stdout belongs to the helper's own output.

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Plaintext,
    /// One JSON object per event
    Json,
}

/// Pick the default level. `--verbose` raises it to at least DEBUG.
pub fn effective_level(configured: Level, verbose: bool) -> Level {
    if verbose {
        // tracing orders levels by verbosity: TRACE > DEBUG > ... > ERROR
        configured.max(Level::DEBUG)
    } else {
        configured
    }
}

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` overrides `default_level` when set.
pub fn init_logging(default_level: Level, format: LogFormat) -> crate::Result<()> {
    init_with_writer(default_level, format, std::io::stderr)
}

/// Install the global subscriber with a custom writer
pub fn init_with_writer<W>(default_level: Level, format: LogFormat, writer: W) -> crate::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    let result = match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(false);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };

    result.map_err(|e| crate::Error::Logging(e.to_string()))
}
