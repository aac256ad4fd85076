//! File locations, read from `patgrant.toml` and `PATGRANT_*` variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "patgrant.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// SQLite database holding the normalized grants.
  pub database:   PathBuf,
  /// Directory containing one sub-directory of JSON files per year.
  pub json_root:  PathBuf,
  pub first_year: u16,
  pub last_year:  u16,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      database:   PathBuf::from("patents.db"),
      json_root:  PathBuf::from("json"),
      first_year: 2002,
      last_year:  2022,
    }
  }
}

impl Settings {
  /// Load from [`CONFIG_FILE`] (if present) and the environment.
  pub fn load() -> Result<Self, config::ConfigError> { Self::load_from(Path::new(CONFIG_FILE)) }

  /// Load from `path` (if present) and the environment. Environment
  /// variables win over the file.
  pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PATGRANT"))
      .build()?
      .try_deserialize()
  }

  /// The inclusive range of years to ingest.
  pub fn years(&self) -> std::ops::RangeInclusive<u16> { self.first_year..=self.last_year }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(settings.json_root, PathBuf::from("json"));
    assert_eq!(settings.years(), 2002..=2022);
  }

  #[test]
  fn file_overrides_some_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patgrant.toml");
    std::fs::write(&path, "database = \"/data/grants.db\"\nfirst_year = 2013\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.database, PathBuf::from("/data/grants.db"));
    assert_eq!(settings.years(), 2013..=2022);
    assert_eq!(settings.json_root, PathBuf::from("json"));
  }
}
