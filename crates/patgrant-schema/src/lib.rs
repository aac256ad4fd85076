//! Grant document normalizer.
//!
//! Maps the three schema generations of the bulk grant files onto the
//! canonical [`patgrant_core::record`] shape. Documents arrive as generic
//! JSON trees; pure synchronous, no I/O.
//!
//! # Quick start
//!
//! ```no_run
//! use patgrant_schema::{Era, normalize};
//!
//! let doc: serde_json::Value = serde_json::from_str("{}").unwrap();
//! let era = Era::for_year(2014).or_else(|| Era::detect(&doc)).unwrap();
//! let grant = normalize(&doc, era).unwrap();
//! println!("{} has {} inventors", grant.patent.document_number, grant.inventors.len());
//! ```

mod early;
mod era;
pub mod error;
mod late;
mod mid;
mod node;

pub use era::Era;
pub use error::{Error, Result};
use patgrant_core::record::NormalizedGrant;
use serde_json::Value;

/// Extract the canonical records from one document of the given era.
///
/// Optional fields that are missing or mistyped become `None`; the result
/// always holds at least one inventor. Fails only when the document number,
/// grant date or filing date is missing.
pub fn normalize(document: &Value, era: Era) -> Result<NormalizedGrant> {
  match era {
    Era::Early => early::extract(document),
    Era::Mid => mid::extract(document),
    Era::Late => late::extract(document),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use strum::IntoEnumIterator;

  use super::*;

  /// The smallest well-formed document of each era.
  fn minimal(era: Era) -> Value {
    match era {
      Era::Early => json!({ "PATDOC": { "SDOBI": {
        "B100": {
          "B110": { "DNUM": { "PDAT": "06400000" } },
          "B140": { "DATE": { "PDAT": "20020604" } }
        },
        "B200": { "B220": { "DATE": { "PDAT": "20000101" } } }
      } } }),
      Era::Mid | Era::Late => json!({ "us-patent-grant": { "us-bibliographic-data-grant": {
        "publication-reference": { "document-id": { "doc-number": "06400000", "date": "20020604" } },
        "application-reference": { "document-id": { "date": "20000101" } }
      } } }),
    }
  }

  #[test]
  fn every_era_defaults_optional_fields() {
    for era in Era::iter() {
      let grant = normalize(&minimal(era), era).unwrap();
      let p = &grant.patent;
      assert_eq!(p.document_kind, None, "{era}");
      assert_eq!(p.national_main_classification, None, "{era}");
      assert_eq!(p.title_of_invention, None, "{era}");
      assert!(!p.sir_flag, "{era}");
      assert!(!p.not_new_invention_flag, "{era}");
    }
  }

  #[test]
  fn every_era_emits_an_inventor() {
    for era in Era::iter() {
      let grant = normalize(&minimal(era), era).unwrap();
      assert_eq!(grant.inventors.len(), 1, "{era}");
      assert_eq!(grant.inventors[0].document_number, "06400000");
    }
  }

  #[test]
  fn grantee_policy_without_assignees() {
    let counts: Vec<(Era, usize)> = Era::iter()
      .map(|era| (era, normalize(&minimal(era), era).unwrap().grantees.len()))
      .collect();
    assert_eq!(counts, vec![(Era::Early, 0), (Era::Mid, 0), (Era::Late, 1)]);
  }

  #[test]
  fn wrong_era_reports_missing_field() {
    let err = normalize(&minimal(Era::Early), Era::Mid).unwrap_err();
    assert_eq!(
      err.to_string(),
      "MID document is missing required field `publication-reference.document-id.doc-number`"
    );
  }
}
