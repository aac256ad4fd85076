//! Command-line front end for patgrant.
//!
//! Hosts the ingestion pipeline, the file-locating configuration shared by
//! the binaries, and the plain-text match report.

pub mod config;
pub mod ingest;
pub mod report;

pub use config::Settings;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber used by every binary.
///
/// Defaults to `INFO`; `RUST_LOG` overrides it.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();
}
