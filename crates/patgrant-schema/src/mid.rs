//! 2005–2012 grants: the first descriptive-tag XML schema.
//!
//! Everything lives under `us-patent-grant.us-bibliographic-data-grant`.
//! Inventors are the `parties.applicants.applicant` records, each with an
//! `addressbook`. The per-patent and per-party readers here are shared with
//! [`crate::late`], which differs only in party grouping and assignee policy.

use patgrant_core::record::{Grantee, Inventor, NormalizedGrant, Patent};
use serde_json::Value;

use crate::{
  Era, Result,
  node::{Address, AddressPaths, any_key, assignee_name, get, has, records, required, text},
};

pub(crate) const BIBLIO: &[&str] = &["us-patent-grant", "us-bibliographic-data-grant"];

pub(crate) const APPLICANTS: &[&str] = &["parties", "applicants", "applicant"];

const RELATED_MARKERS: &[&str] = &[
  "reissue",
  "us-divisional-reissue",
  "reexamination",
  "us-reexamination-reissue-merger",
  "substitution",
  "continuation",
  "continuation-in-part",
  "continuing-reissue",
];

const ADDRESS: AddressPaths = AddressPaths {
  city:    &["city"],
  state:   &["state"],
  country: &["country"],
};

pub(crate) fn extract(document: &Value) -> Result<NormalizedGrant> {
  let empty = Value::Null;
  let biblio = get(document, BIBLIO).unwrap_or(&empty);

  let patent = patent(biblio, Era::Mid)?;
  let inventors = inventors(&patent.document_number, get(biblio, APPLICANTS));
  let grantees = grantees(&patent.document_number, biblio);

  Ok(NormalizedGrant { patent, inventors, grantees })
}

pub(crate) fn patent(biblio: &Value, era: Era) -> Result<Patent> {
  let doc_id = ["publication-reference", "document-id"];
  Ok(Patent {
    document_number:              required(biblio, &[doc_id[0], doc_id[1], "doc-number"], era)?,
    sir_flag:                     has(biblio, &["us-sir-flag"]),
    document_kind:                text(biblio, &[doc_id[0], doc_id[1], "kind"]),
    document_date:                required(biblio, &[doc_id[0], doc_id[1], "date"], era)?,
    application_filing_date:      required(
      biblio,
      &["application-reference", "document-id", "date"],
      era,
    )?,
    national_main_classification: text(
      biblio,
      &["classification-national", "main-classification"],
    ),
    title_of_invention:           title(biblio),
    not_new_invention_flag:       get(biblio, &["us-related-documents"])
      .is_some_and(|related| any_key(related, RELATED_MARKERS)),
  })
}

/// The title text; carried in `#text` when the element has attributes, or
/// as a bare string when it has none.
fn title(biblio: &Value) -> Option<String> {
  match get(biblio, &["invention-title"])? {
    Value::String(s) => Some(s.clone()),
    node => text(node, &["#text"]),
  }
}

/// Inventor rows from an applicant block; never empty.
pub(crate) fn inventors(number: &str, applicants: Option<&Value>) -> Vec<Inventor> {
  let mut out: Vec<Inventor> = records(applicants)
    .into_iter()
    .map(|rec| inventor(number, rec))
    .collect();
  if out.is_empty() {
    out.push(Inventor::unknown(number));
  }
  out
}

fn inventor(number: &str, record: &Value) -> Inventor {
  let Some(book) = get(record, &["addressbook"]) else {
    return Inventor::unknown(number);
  };
  let address = Address::read(get(book, &["address"]), &ADDRESS);
  Inventor {
    document_number: number.to_owned(),
    first_name:      text(book, &["first-name"]),
    surname:         text(book, &["last-name"]),
    city:            address.city,
    state:           address.state,
    country:         address.country,
  }
}

/// Grantee rows from the `assignees` section; empty when it is absent.
pub(crate) fn grantees(number: &str, biblio: &Value) -> Vec<Grantee> {
  records(get(biblio, &["assignees", "assignee"]))
    .into_iter()
    .map(|rec| grantee(number, rec))
    .collect()
}

fn grantee(number: &str, record: &Value) -> Grantee {
  let Some(book) = get(record, &["addressbook"]) else {
    return Grantee::unknown(number);
  };
  let address = Address::read(get(book, &["address"]), &ADDRESS);
  Grantee {
    document_number: number.to_owned(),
    name:            assignee_name(
      text(book, &["orgname"]),
      text(book, &["first-name"]),
      text(book, &["last-name"]),
    ),
    city:            address.city,
    state:           address.state,
    country:         address.country,
    kind:            text(book, &["role"]),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn bare() -> Value {
    json!({ "us-patent-grant": { "us-bibliographic-data-grant": {
      "publication-reference": { "document-id": {
        "doc-number": "07000001", "date": "20060221"
      } },
      "application-reference": { "document-id": { "date": "20030910" } }
    } } })
  }

  fn biblio(doc: &mut Value) -> &mut Value {
    &mut doc["us-patent-grant"]["us-bibliographic-data-grant"]
  }

  #[test]
  fn bare_document_uses_defaults() {
    let grant = extract(&bare()).unwrap();
    let p = &grant.patent;

    assert_eq!(p.document_number, "07000001");
    assert_eq!(p.document_date, "20060221");
    assert_eq!(p.application_filing_date, "20030910");
    assert!(!p.sir_flag);
    assert_eq!(p.document_kind, None);
    assert_eq!(p.national_main_classification, None);
    assert_eq!(p.title_of_invention, None);
    assert!(!p.not_new_invention_flag);

    assert_eq!(grant.inventors, vec![Inventor::unknown("07000001")]);
    assert!(grant.grantees.is_empty());
  }

  #[test]
  fn patent_fields() {
    let mut doc = bare();
    let b = biblio(&mut doc);
    b["publication-reference"]["document-id"]["kind"] = json!("B2");
    b["us-sir-flag"] = json!({ "@sir-text": "yes" });
    b["classification-national"] = json!({ "country": "US", "main-classification": "257347" });
    b["invention-title"] = json!({ "@id": "d0e53", "#text": "Transistor with strained channel" });
    b["us-related-documents"] = json!({ "continuation-in-part": {} });

    let p = extract(&doc).unwrap().patent;
    assert_eq!(p.document_kind.as_deref(), Some("B2"));
    assert!(p.sir_flag);
    assert_eq!(p.national_main_classification.as_deref(), Some("257347"));
    assert_eq!(p.title_of_invention.as_deref(), Some("Transistor with strained channel"));
    assert!(p.not_new_invention_flag);
  }

  #[test]
  fn title_variants() {
    let mut doc = bare();
    biblio(&mut doc)["invention-title"] = json!("Plain title");
    assert_eq!(extract(&doc).unwrap().patent.title_of_invention.as_deref(), Some("Plain title"));

    biblio(&mut doc)["invention-title"] =
      json!({ "@id": "t1", "#text": ["Split", "title"] });
    assert_eq!(extract(&doc).unwrap().patent.title_of_invention, None);
  }

  #[test]
  fn unrelated_related_documents_do_not_set_flag() {
    let mut doc = bare();
    biblio(&mut doc)["us-related-documents"] = json!({ "related-publication": {} });
    assert!(!extract(&doc).unwrap().patent.not_new_invention_flag);
  }

  #[test]
  fn single_applicant_is_one_inventor() {
    let mut doc = bare();
    biblio(&mut doc)["parties"] = json!({ "applicants": { "applicant": {
      "@sequence": "001",
      "addressbook": {
        "last-name": "Hwu", "first-name": "Wen-mei",
        "address": { "city": "Champaign", "state": "IL", "country": "US" }
      }
    } } });

    let inventors = extract(&doc).unwrap().inventors;
    assert_eq!(inventors.len(), 1);
    assert_eq!(inventors[0].first_name.as_deref(), Some("Wen-mei"));
    assert_eq!(inventors[0].surname.as_deref(), Some("Hwu"));
    assert_eq!(inventors[0].state.as_deref(), Some("IL"));
  }

  #[test]
  fn applicant_list_keeps_order_and_defaults() {
    let mut doc = bare();
    biblio(&mut doc)["parties"] = json!({ "applicants": { "applicant": [
      { "addressbook": { "last-name": "Do", "first-name": "Minh",
                         "address": { "city": ["Urbana", "IL"] } } },
      { "residence": {} },
      { "addressbook": { "last-name": "Reid", "address": { "city": "Paris", "country": "FR" } } }
    ] } });

    let inventors = extract(&doc).unwrap().inventors;
    assert_eq!(inventors.len(), 3);

    assert_eq!(inventors[0].surname.as_deref(), Some("Do"));
    assert_eq!(inventors[0].city, None);
    assert_eq!(inventors[0].country.as_deref(), Some("US"));

    assert_eq!(inventors[1], Inventor::unknown("07000001"));

    assert_eq!(inventors[2].first_name, None);
    assert_eq!(inventors[2].country.as_deref(), Some("FR"));
  }

  #[test]
  fn assignees() {
    let mut doc = bare();
    biblio(&mut doc)["assignees"] = json!({ "assignee": [
      { "addressbook": {
        "orgname": "The Board of Trustees of the University of Illinois",
        "role": "02",
        "address": { "city": "Urbana", "state": "IL" }
      } },
      { "addressbook": { "first-name": "Jane", "last-name": "Doe", "role": "04" } },
      { "no-addressbook": {} }
    ] });

    let grantees = extract(&doc).unwrap().grantees;
    assert_eq!(grantees.len(), 3);
    assert_eq!(
      grantees[0].name.as_deref(),
      Some("The Board of Trustees of the University of Illinois")
    );
    assert_eq!(grantees[0].kind.as_deref(), Some("02"));
    assert_eq!(grantees[0].country.as_deref(), Some("US"));

    assert_eq!(grantees[1].name.as_deref(), Some("Jane Doe"));
    assert_eq!(grantees[1].country, None);

    assert!(grantees[2].is_unknown());
  }
}
