//! Build the patent database from the yearly bulk JSON files.
//!
//! Locations come from `patgrant.toml` or `PATGRANT_*` variables; see
//! [`patgrant_cli::Settings`].

use anyhow::Context as _;
use clap::Parser;
use patgrant_cli::{Settings, ingest};
use patgrant_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Ingest bulk patent grant files")]
struct Cli {}

fn main() -> anyhow::Result<()> {
  patgrant_cli::init_tracing();
  Cli::parse();

  let settings = Settings::load().context("failed to read configuration")?;

  let store = SqliteStore::create(&settings.database)
    .with_context(|| format!("failed to create store at {:?}", settings.database))?;

  let reports = ingest::ingest_range(&store, &settings.json_root, settings.years())
    .context("ingestion failed")?;

  let patents: usize = reports.iter().map(|r| r.patents).sum();
  tracing::info!(
    years = reports.len(),
    patents,
    inventors = store.count("inventors")?,
    grantees = store.count("grantees")?,
    "ingestion complete"
  );

  Ok(())
}
