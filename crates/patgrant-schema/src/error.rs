//! Error types for the grant schema normalizer.

use thiserror::Error;

use crate::Era;

#[derive(Debug, Error)]
pub enum Error {
  /// A field every well-formed document of the era carries was absent or
  /// not text.
  #[error("{era} document is missing required field `{path}`")]
  MissingField { era: Era, path: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
