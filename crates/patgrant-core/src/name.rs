//! Free-text person name canonicalization.
//!
//! Roster names arrive as either `Surname, First Middle` or
//! `First Middle Surname`. Both collapse to a first-name token plus a surname.
//! Titles and suffixes are not recognised.

use serde::{Deserialize, Serialize};

/// A cleaned roster entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalName {
  /// Leading alphabetic run of the first given-name token; may be a bare
  /// initial, or empty when the roster line held a single word.
  pub first_name: String,
  pub surname:    String,
}

impl CanonicalName {
  pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
    Self { first_name: first_name.into(), surname: surname.into() }
  }
}

/// Clean one raw name.
///
/// ```
/// use patgrant_core::name::{clean, CanonicalName};
///
/// assert_eq!(clean("Smith, John A."), CanonicalName::new("John", "Smith"));
/// assert_eq!(clean("Jane Q. Doe"), CanonicalName::new("Jane", "Doe"));
/// assert_eq!(clean("Prince"), CanonicalName::new("", "Prince"));
/// ```
pub fn clean(raw: &str) -> CanonicalName {
  if let Some((surname, given)) = raw.split_once(',') {
    let first = given.split_whitespace().next().unwrap_or("");
    return CanonicalName::new(leading_alpha(first), surname.trim());
  }

  let words: Vec<&str> = raw.split_whitespace().collect();
  match words.as_slice() {
    [] => CanonicalName::default(),
    [only] => CanonicalName::new("", *only),
    [first, .., last] => CanonicalName::new(leading_alpha(first), *last),
  }
}

/// Clean every non-blank line of a roster, preserving order.
pub fn clean_roster<I, S>(lines: I) -> Vec<CanonicalName>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  lines
    .into_iter()
    .filter(|l| !l.as_ref().trim().is_empty())
    .map(|l| clean(l.as_ref()))
    .collect()
}

/// The first character plus every alphabetic character directly after it.
///
/// Strips the period from an initial (`"A."` → `"A"`) and anything after a
/// hyphen or apostrophe.
fn leading_alpha(token: &str) -> &str {
  let mut chars = token.char_indices();
  if chars.next().is_none() {
    return "";
  }
  let end = chars
    .find(|(_, c)| !c.is_alphabetic())
    .map_or(token.len(), |(i, _)| i);
  &token[..end]
}
