//! Roster-to-patent matching.
//!
//! Matching is deterministic and rule-based: exact surname, first-name
//! containment, institution substring. There is no scoring.

use crate::{
  name::{CanonicalName, clean_roster},
  record::MatchRow,
  store::RecordStore,
};

/// Find the patents credited to roster members and assigned to
/// `institution`.
///
/// The roster session is always closed before returning. A failing join is
/// logged and treated as an empty result; failures to stage or tear down the
/// roster are returned.
pub fn search<S: RecordStore>(
  store: &S,
  roster: &[CanonicalName],
  institution: &str,
) -> Result<Vec<MatchRow>, S::Error> {
  let session = store.open_roster()?;

  let staged = store.insert_roster(&session, roster);
  let rows = match staged {
    Ok(count) => {
      tracing::debug!(session = %session.id(), count, "roster staged");
      match store.match_roster(&session, institution) {
        Ok(rows) => rows,
        Err(e) => {
          tracing::error!(session = %session.id(), "invalid roster query: {e}");
          Vec::new()
        }
      }
    }
    Err(e) => {
      store.close_roster(session)?;
      return Err(e);
    }
  };

  store.close_roster(session)?;
  Ok(rows)
}

/// Clean raw roster lines and [`search`] with the result.
pub fn run<S, I, L>(store: &S, lines: I, institution: &str) -> Result<Vec<MatchRow>, S::Error>
where
  S: RecordStore,
  I: IntoIterator<Item = L>,
  L: AsRef<str>,
{
  let roster = clean_roster(lines);
  search(store, &roster, institution)
}
