//! 2013 onward: `us-parties` grouping, optional classification and
//! assignees.

use patgrant_core::record::{Grantee, NormalizedGrant};
use serde_json::Value;

use crate::{
  Era, Result,
  mid::{APPLICANTS, BIBLIO, grantees, inventors, patent},
  node::get,
};

const US_APPLICANTS: &[&str] = &["us-parties", "us-applicants", "us-applicant"];

pub(crate) fn extract(document: &Value) -> Result<NormalizedGrant> {
  let empty = Value::Null;
  let biblio = get(document, BIBLIO).unwrap_or(&empty);

  let patent = patent(biblio, Era::Late)?;
  let number = patent.document_number.as_str();

  let applicants = if get(biblio, &["us-parties"]).is_some() {
    get(biblio, US_APPLICANTS)
  } else {
    get(biblio, APPLICANTS)
  };
  let inventors = inventors(number, applicants);

  // A grant without an assignee record, including an empty or null
  // `assignees` section, still gets one placeholder grantee row.
  let mut grantees = grantees(number, biblio);
  if grantees.is_empty() {
    grantees.push(Grantee::unknown(number));
  }

  Ok(NormalizedGrant { patent, inventors, grantees })
}
