//! 2002–2004 grants: SGML red-book field codes.
//!
//! Layout (all under `PATDOC.SDOBI`):
//!   B100  publication: B110 number, B122US SIR, B130 kind, B140 date
//!   B200  application: B220 filing date
//!   B500  technical:   B521 US class, B540 title
//!   B600  related documents
//!   B700  parties:     B721 inventors, B730 assignees

use patgrant_core::record::{Grantee, Inventor, NormalizedGrant, Patent};
use serde_json::Value;

use crate::{
  Era, Result,
  node::{Address, AddressPaths, any_key, assignee_name, get, has, records, required, text},
};

/// Direct children of B600 marking a reissue, reexamination or substitution.
const RELATED_MARKERS: &[&str] = &["B640", "B641US", "B645", "B645US", "B660"];
/// Children of B600.B630 marking a continuation, continuation-in-part or
/// division.
const CONTINUITY_MARKERS: &[&str] = &["B631", "B632", "B633"];

const ADDRESS: AddressPaths = AddressPaths {
  city:    &["CITY", "PDAT"],
  state:   &["STATE", "PDAT"],
  country: &["CTRY", "PDAT"],
};

pub(crate) fn extract(document: &Value) -> Result<NormalizedGrant> {
  let empty = Value::Null;
  let sdobi = get(document, &["PATDOC", "SDOBI"]).unwrap_or(&empty);

  let patent = patent(sdobi)?;
  let number = &patent.document_number;

  let mut inventors: Vec<Inventor> = records(get(sdobi, &["B700", "B720", "B721"]))
    .into_iter()
    .map(|rec| inventor(number, rec))
    .collect();
  if inventors.is_empty() {
    inventors.push(Inventor::unknown(number.as_str()));
  }

  let grantees = records(get(sdobi, &["B700", "B730"]))
    .into_iter()
    .map(|rec| grantee(number, rec))
    .collect();

  Ok(NormalizedGrant { patent, inventors, grantees })
}

fn patent(sdobi: &Value) -> Result<Patent> {
  let era = Era::Early;
  Ok(Patent {
    document_number:              required(sdobi, &["B100", "B110", "DNUM", "PDAT"], era)?,
    sir_flag:                     has(sdobi, &["B100", "B122US"]),
    document_kind:                text(sdobi, &["B100", "B130", "PDAT"]),
    document_date:                required(sdobi, &["B100", "B140", "DATE", "PDAT"], era)?,
    application_filing_date:      required(sdobi, &["B200", "B220", "DATE", "PDAT"], era)?,
    national_main_classification: text(sdobi, &["B500", "B520", "B521", "PDAT"]),
    title_of_invention:           text(sdobi, &["B500", "B540", "STEXT", "PDAT"]),
    not_new_invention_flag:       not_new_invention(sdobi),
  })
}

fn not_new_invention(sdobi: &Value) -> bool {
  let Some(related) = get(sdobi, &["B600"]) else {
    return false;
  };
  any_key(related, RELATED_MARKERS)
    || get(related, &["B630"]).is_some_and(|c| any_key(c, CONTINUITY_MARKERS))
}

fn inventor(number: &str, record: &Value) -> Inventor {
  let empty = Value::Null;
  let party = get(record, &["PARTY-US"]).unwrap_or(&empty);
  let address = Address::read(get(party, &["ADR"]), &ADDRESS);
  Inventor {
    document_number: number.to_owned(),
    first_name:      text(party, &["NAM", "FNM", "PDAT"]),
    surname:         text(party, &["NAM", "SNM", "STEXT", "PDAT"]),
    city:            address.city,
    state:           address.state,
    country:         address.country,
  }
}

fn grantee(number: &str, record: &Value) -> Grantee {
  let empty = Value::Null;
  let party = get(record, &["B731", "PARTY-US"]).unwrap_or(&empty);
  let address = Address::read(get(party, &["ADR"]), &ADDRESS);
  Grantee {
    document_number: number.to_owned(),
    name:            assignee_name(
      text(party, &["NAM", "ONM", "STEXT", "PDAT"]),
      text(party, &["NAM", "FNM", "PDAT"]),
      text(party, &["NAM", "SNM", "STEXT", "PDAT"]),
    ),
    city:            address.city,
    state:           address.state,
    country:         address.country,
    kind:            text(record, &["B732US", "PDAT"]),
  }
}
