//! Canonical records: the uniform shape every document era normalizes into.
//!
//! Absent or mistyped source fields are `None`; the store persists them as
//! SQL `NULL`.

use serde::{Deserialize, Serialize};

// ─── Patent ──────────────────────────────────────────────────────────────────

/// One granted patent. Created once per ingested document and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patent {
  pub document_number:              String,
  /// Statutory invention registration marker.
  pub sir_flag:                     bool,
  pub document_kind:                Option<String>,
  /// Grant date, as printed in the source.
  pub document_date:                String,
  pub application_filing_date:      String,
  pub national_main_classification: Option<String>,
  pub title_of_invention:           Option<String>,
  /// Set when the grant is a reissue, reexamination, continuation or one of
  /// the other related-document kinds.
  pub not_new_invention_flag:       bool,
}

// ─── Parties ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventor {
  pub document_number: String,
  pub first_name:      Option<String>,
  pub surname:         Option<String>,
  pub city:            Option<String>,
  pub state:           Option<String>,
  pub country:         Option<String>,
}

impl Inventor {
  /// An inventor row with every attribute absent.
  pub fn unknown(document_number: impl Into<String>) -> Self {
    Self { document_number: document_number.into(), ..Default::default() }
  }
}

/// An assignee of a patent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grantee {
  pub document_number: String,
  pub name:            Option<String>,
  pub city:            Option<String>,
  pub state:           Option<String>,
  pub country:         Option<String>,
  /// Assignee role code (corporate, individual, government, …).
  pub kind:            Option<String>,
}

impl Grantee {
  /// A grantee row with every attribute absent.
  pub fn unknown(document_number: impl Into<String>) -> Self {
    Self { document_number: document_number.into(), ..Default::default() }
  }

  pub fn is_unknown(&self) -> bool {
    self.name.is_none()
      && self.city.is_none()
      && self.state.is_none()
      && self.country.is_none()
      && self.kind.is_none()
  }
}

// ─── Bundles ─────────────────────────────────────────────────────────────────

/// Everything extracted from one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedGrant {
  pub patent:    Patent,
  /// Never empty.
  pub inventors: Vec<Inventor>,
  pub grantees:  Vec<Grantee>,
}

/// One row of a roster match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRow {
  pub inventor_first_name: Option<String>,
  pub roster_first_name:   String,
  pub roster_surname:      String,
  pub inventor_city:       Option<String>,
  pub inventor_state:      Option<String>,
  pub grantee_name:        String,
  pub document_number:     String,
  pub document_date:       String,
  pub title_of_invention:  Option<String>,
}
