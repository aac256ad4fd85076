//! Match a faculty roster against the patent database.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use patgrant_cli::{Settings, report};
use patgrant_core::{matcher, roster::read_roster};
use patgrant_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Find patents held by an institution's faculty")]
struct Cli {
  /// Roster file, one name per line.
  faculty_namelist_file: PathBuf,
  /// Substring of the assignee name, e.g. "University of Illinois".
  university_name:       String,
}

fn main() -> anyhow::Result<()> {
  patgrant_cli::init_tracing();
  let cli = Cli::parse();

  let settings = Settings::load().context("failed to read configuration")?;
  let store = SqliteStore::open(&settings.database)
    .with_context(|| format!("failed to open store at {:?}", settings.database))?;

  let lines = read_roster(&cli.faculty_namelist_file)
    .with_context(|| format!("failed to read {}", cli.faculty_namelist_file.display()))?;

  let rows = matcher::run(&store, &lines, &cli.university_name).context("match failed")?;

  print!("{}", report::render(&rows));
  Ok(())
}
