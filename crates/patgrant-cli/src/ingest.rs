//! Bulk ingestion: `<json_root>/<year>/<file>.json` into a [`RecordStore`].
//!
//! Years are processed in order, files in name order, and each file is
//! committed as one batch. A year is reported only once all of its files
//! are committed.

use std::{
  ops::RangeInclusive,
  path::{Path, PathBuf},
};

use patgrant_core::{record::NormalizedGrant, store::RecordStore};
use patgrant_schema::{Era, normalize};
use serde_json::Value;
use thiserror::Error;

/// Source files known to be malformed, relative to the JSON root.
pub const SKIPPED_FILES: &[&str] = &[
  "2002/pgb20020430.json",
  "2002/pgb20020528.json",
  "2005/ipgb20050920.json",
];

#[derive(Debug, Error)]
pub enum IngestError {
  #[error("failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to decode {}: {source}", path.display())]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("{}: document {index}: {source}", path.display())]
  Normalize {
    path:   PathBuf,
    index:  usize,
    #[source]
    source: patgrant_schema::Error,
  },

  /// The year has no known era and the document matches none either.
  #[error("{}: document {index} has an unrecognised layout", path.display())]
  UnknownLayout { path: PathBuf, index: usize },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = IngestError> = std::result::Result<T, E>;

/// Outcome of one ingested year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearReport {
  pub year:    u16,
  pub files:   usize,
  pub skipped: usize,
  pub patents: usize,
}

/// Ingest every year in `years` from `root`.
pub fn ingest_range<S: RecordStore>(
  store: &S,
  root: &Path,
  years: RangeInclusive<u16>,
) -> Result<Vec<YearReport>> {
  years.map(|year| ingest_year(store, root, year)).collect()
}

/// Ingest `<root>/<year>`. A missing year directory is logged and yields an
/// empty report.
pub fn ingest_year<S: RecordStore>(store: &S, root: &Path, year: u16) -> Result<YearReport> {
  let mut report = YearReport { year, ..Default::default() };
  let dir = root.join(year.to_string());
  if !dir.is_dir() {
    tracing::warn!(year, "no directory at {}", dir.display());
    return Ok(report);
  }

  let era = Era::for_year(year);
  for path in list_files(&dir)? {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      continue;
    };
    if !is_ingestible(year, name) {
      tracing::warn!(year, "skipping {name}");
      report.skipped += 1;
      continue;
    }

    let count = ingest_file(store, &path, era)?;
    tracing::debug!(year, count, "committed {name}");
    report.files += 1;
    report.patents += count;
  }

  tracing::info!(
    year,
    files = report.files,
    patents = report.patents,
    "year complete"
  );
  Ok(report)
}

/// Normalize and store every document of one JSON array file.
///
/// `era` applies to the whole file when known; otherwise each document's
/// layout decides.
pub fn ingest_file<S: RecordStore>(store: &S, path: &Path, era: Option<Era>) -> Result<usize> {
  let text = std::fs::read_to_string(path)
    .map_err(|source| IngestError::Io { path: path.to_owned(), source })?;
  let documents: Vec<Value> = serde_json::from_str(&text)
    .map_err(|source| IngestError::Json { path: path.to_owned(), source })?;

  let grants = documents
    .iter()
    .enumerate()
    .map(|(index, doc)| {
      let era = era
        .or_else(|| Era::detect(doc))
        .ok_or_else(|| IngestError::UnknownLayout { path: path.to_owned(), index })?;
      normalize(doc, era).map_err(|source| IngestError::Normalize {
        path: path.to_owned(),
        index,
        source,
      })
    })
    .collect::<Result<Vec<NormalizedGrant>>>()?;

  store
    .insert_grants(&grants)
    .map_err(|e| IngestError::Store(Box::new(e)))
}

/// Entries of `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
  let io = |source: std::io::Error| IngestError::Io { path: dir.to_owned(), source };
  let mut paths = std::fs::read_dir(dir)
    .map_err(io)?
    .map(|entry| entry.map(|e| e.path()))
    .collect::<std::io::Result<Vec<_>>>()
    .map_err(io)?;
  paths.sort();
  Ok(paths)
}

fn is_ingestible(year: u16, name: &str) -> bool {
  name.ends_with(".json") && !SKIPPED_FILES.contains(&format!("{year}/{name}").as_str())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use patgrant_store_sqlite::SqliteStore;
  use serde_json::json;

  use super::*;

  fn late_doc(number: &str, surname: &str) -> Value {
    json!({ "us-patent-grant": { "us-bibliographic-data-grant": {
      "publication-reference": { "document-id": {
        "doc-number": number, "kind": "B2", "date": "20140107"
      } },
      "application-reference": { "document-id": { "date": "20120301" } },
      "invention-title": { "#text": "Widget" },
      "us-parties": { "us-applicants": { "us-applicant": {
        "addressbook": {
          "first-name": "Ann",
          "last-name": surname,
          "address": { "city": "Urbana", "state": "IL", "country": "US" }
        }
      } } }
    } } })
  }

  fn write_year(root: &Path, year: u16, files: &[(&str, Value)]) {
    let dir = root.join(year.to_string());
    fs::create_dir_all(&dir).unwrap();
    for (name, body) in files {
      fs::write(dir.join(name), body.to_string()).unwrap();
    }
  }

  #[test]
  fn skips_non_json_and_denylisted_files() {
    assert!(is_ingestible(2002, "pgb20020101.json"));
    assert!(!is_ingestible(2002, ".DS_Store"));
    assert!(!is_ingestible(2002, "pgb20020430.json"));
    assert!(!is_ingestible(2005, "ipgb20050920.json"));
    assert!(is_ingestible(2006, "ipgb20050920.json"));
  }

  #[test]
  fn ingests_year_directory() {
    let root = tempfile::tempdir().unwrap();
    write_year(root.path(), 2014, &[
      ("ipg140107.json", json!([late_doc("08600001", "Reid"), late_doc("08600002", "Do")])),
      ("ipg140114.json", json!([late_doc("08600003", "Hwu")])),
      ("notes.txt", json!("ignored")),
    ]);
    let store = SqliteStore::open_in_memory().unwrap();

    let report = ingest_year(&store, root.path(), 2014).unwrap();

    assert_eq!(report, YearReport { year: 2014, files: 2, skipped: 1, patents: 3 });
    assert_eq!(store.count("patents").unwrap(), 3);
    assert_eq!(store.count("inventors").unwrap(), 3);
    // No assignees on a late document still records one grantee row.
    assert_eq!(store.count("grantees").unwrap(), 3);
  }

  #[test]
  fn missing_year_is_empty() {
    let root = tempfile::tempdir().unwrap();
    let store = SqliteStore::open_in_memory().unwrap();

    let reports = ingest_range(&store, root.path(), 2013..=2014).unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.files == 0 && r.patents == 0));
  }

  #[test]
  fn unknown_year_falls_back_to_layout() {
    let root = tempfile::tempdir().unwrap();
    write_year(root.path(), 1999, &[("old.json", json!([late_doc("05000001", "Reid")]))]);
    let store = SqliteStore::open_in_memory().unwrap();

    let report = ingest_year(&store, root.path(), 1999).unwrap();
    assert_eq!(report.patents, 1);
  }

  #[test]
  fn missing_required_field_aborts_with_location() {
    let root = tempfile::tempdir().unwrap();
    let mut broken = late_doc("08600009", "Reid");
    broken["us-patent-grant"]["us-bibliographic-data-grant"]
      .as_object_mut()
      .unwrap()
      .remove("application-reference");
    write_year(root.path(), 2014, &[("ipg140107.json", json!([late_doc("08600008", "Do"), broken]))]);
    let store = SqliteStore::open_in_memory().unwrap();

    let err = ingest_year(&store, root.path(), 2014).unwrap_err();

    assert!(matches!(err, IngestError::Normalize { index: 1, .. }));
    assert_eq!(store.count("patents").unwrap(), 0);
  }

  #[test]
  fn malformed_json_is_reported() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("2014");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("ipg140107.json"), "[{").unwrap();
    let store = SqliteStore::open_in_memory().unwrap();

    let err = ingest_year(&store, root.path(), 2014).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
  }
}
