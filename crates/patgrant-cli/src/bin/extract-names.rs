//! Turn a scraped faculty directory into a one-name-per-line roster.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use patgrant_core::roster::{extract_faculty_names, write_roster};

#[derive(Parser)]
#[command(author, version, about = "Extract faculty names from a directory JSON file")]
struct Cli {
  /// Faculty directory JSON file.
  json_file:   PathBuf,
  /// Roster file to write; overwritten if it exists.
  output_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
  patgrant_cli::init_tracing();
  let cli = Cli::parse();

  let json = std::fs::read_to_string(&cli.json_file)
    .with_context(|| format!("failed to read {}", cli.json_file.display()))?;
  let names = extract_faculty_names(&json)
    .with_context(|| format!("failed to parse {}", cli.json_file.display()))?;

  write_roster(&cli.output_file, &names)
    .with_context(|| format!("failed to write {}", cli.output_file.display()))?;
  tracing::debug!(count = names.len(), "names written");

  println!("{} created.", cli.output_file.display());
  Ok(())
}
