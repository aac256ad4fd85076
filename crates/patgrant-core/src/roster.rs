//! Roster files: reading name lists and building them from faculty
//! directory exports.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// Read a roster file: one free-text name per line, line endings stripped.
pub fn read_roster(path: impl AsRef<Path>) -> Result<Vec<String>> {
  let text = fs::read_to_string(path)?;
  Ok(text.lines().map(str::to_owned).collect())
}

/// Overwrite `path` with one name per line, each newline-terminated.
pub fn write_roster(path: impl AsRef<Path>, names: &[String]) -> Result<()> {
  let mut out = String::new();
  for name in names {
    out.push_str(name);
    out.push('\n');
  }
  fs::write(path, out)?;
  Ok(())
}

// ─── Faculty directory export ────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectoryPage {
  #[serde(rename = "Faculty information", default)]
  faculty: Vec<DirectoryEntry>,
}

#[derive(Deserialize)]
struct DirectoryEntry {
  #[serde(rename = "Name", default)]
  name: Value,
}

/// Collect faculty names from a directory export.
///
/// The export is a JSON array of pages, each carrying a
/// `"Faculty information"` list of `{"Name": …}` objects. Names are trimmed
/// and returned in order of first appearance without duplicates. A
/// non-string name is rendered as its JSON text.
pub fn extract_faculty_names(json: &str) -> Result<Vec<String>> {
  let pages: Vec<DirectoryPage> = serde_json::from_str(json)?;

  let mut names: Vec<String> = Vec::new();
  for entry in pages.into_iter().flat_map(|p| p.faculty) {
    let name = match entry.name {
      Value::String(s) => s.trim().to_owned(),
      other => other.to_string().trim().to_owned(),
    };
    if !names.contains(&name) {
      names.push(name);
    }
  }
  Ok(names)
}
