//! Probing helpers over the generic document tree.
//!
//! Every lookup is a fixed path of object keys. A missing key anywhere on the
//! path, or a leaf of the wrong type, resolves to `None`; nothing here fails.

use serde_json::Value;

use crate::{Era, Error, Result};

pub(crate) fn get<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
  path.iter().try_fold(node, |cur, key| cur.as_object()?.get(*key))
}

pub(crate) fn has(node: &Value, path: &[&str]) -> bool { get(node, path).is_some() }

/// String leaf at `path`; lists, objects, numbers and nulls become `None`.
pub(crate) fn text(node: &Value, path: &[&str]) -> Option<String> {
  get(node, path).and_then(Value::as_str).map(str::to_owned)
}

/// String leaf at `path` that every well-formed document carries.
pub(crate) fn required(node: &Value, path: &[&str], era: Era) -> Result<String> {
  text(node, path).ok_or_else(|| Error::MissingField { era, path: path.join(".") })
}

/// Normalize a one-or-many sub-record into a sequence.
///
/// An object is a single record; an array holds records in source order.
/// Non-object array elements are dropped.
pub(crate) fn records(node: Option<&Value>) -> Vec<&Value> {
  match node {
    Some(obj @ Value::Object(_)) => vec![obj],
    Some(Value::Array(items)) => items.iter().filter(|v| v.is_object()).collect(),
    _ => Vec::new(),
  }
}

/// Whether `section` carries any of `markers` as a direct key.
pub(crate) fn any_key(section: &Value, markers: &[&str]) -> bool {
  section
    .as_object()
    .is_some_and(|obj| markers.iter().any(|m| obj.contains_key(*m)))
}

// ─── Shared party fields ─────────────────────────────────────────────────────

/// Where an era keeps the parts of an address block, relative to the block.
pub(crate) struct AddressPaths {
  pub city:    &'static [&'static str],
  pub state:   &'static [&'static str],
  pub country: &'static [&'static str],
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Address {
  pub city:    Option<String>,
  pub state:   Option<String>,
  pub country: Option<String>,
}

/// Country assumed for an address block that names none.
pub(crate) const ISSUING_COUNTRY: &str = "US";

impl Address {
  /// Read an address block; an absent block yields an empty address.
  pub(crate) fn read(block: Option<&Value>, paths: &AddressPaths) -> Self {
    let Some(block) = block else {
      return Self::default();
    };
    let country = if has(block, &paths.country[..1]) {
      text(block, paths.country)
    } else {
      Some(ISSUING_COUNTRY.to_owned())
    };
    Self {
      city: text(block, paths.city),
      state: text(block, paths.state),
      country,
    }
  }
}

/// Assignee display name: organization, else `first surname`, else surname,
/// else first name.
pub(crate) fn assignee_name(
  org: Option<String>,
  first: Option<String>,
  surname: Option<String>,
) -> Option<String> {
  org.or_else(|| match (first, surname) {
    (Some(f), Some(s)) => Some(format!("{f} {s}")),
    (None, Some(s)) => Some(s),
    (Some(f), None) => Some(f),
    (None, None) => None,
  })
}
