//! Document schema generations.

use serde_json::Value;
use strum::{Display, EnumIter};

use crate::node::has;

/// The schema generation a grant document was published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Era {
  /// 2002–2004: SGML-derived documents keyed by short field codes
  /// (`B110`, `B220`, …) under `PATDOC`.
  Early,
  /// 2005–2012: descriptive tag names under `us-patent-grant`, parties under
  /// `parties`; every grant has an assignee section.
  Mid,
  /// 2013 onward: parties under `us-parties`, classification and assignees
  /// may be missing.
  Late,
}

impl Era {
  /// The era documents issued in `year` use.
  pub fn for_year(year: u16) -> Option<Self> {
    match year {
      2002..=2004 => Some(Self::Early),
      2005..=2012 => Some(Self::Mid),
      2013.. => Some(Self::Late),
      _ => None,
    }
  }

  /// Classify a document by its top-level layout.
  ///
  /// Late documents that still use the `parties` grouping are reported as
  /// [`Era::Mid`]; prefer [`Era::for_year`] when the issue year is known.
  pub fn detect(document: &Value) -> Option<Self> {
    if has(document, &["PATDOC"]) {
      return Some(Self::Early);
    }
    let biblio = ["us-patent-grant", "us-bibliographic-data-grant"];
    if !has(document, &biblio) {
      return None;
    }
    if has(document, &[biblio[0], biblio[1], "us-parties"]) {
      Some(Self::Late)
    } else {
      Some(Self::Mid)
    }
  }
}
