//! Plain-text rendering of match results.

use std::fmt::{self, Display, Write as _};

use patgrant_core::record::MatchRow;

pub const HEADER: &str = "Patent Records:";

pub const LEGEND: &str = "(inventor_first_name, faculty_first_name, faculty_last_name, \
                          inventor_city, inventor_state, grantee_name, \
                          patent_document_number, document_date, title_of_invention)";

/// One result row as a parenthesised tuple. Absent values print as `None`.
pub struct Tuple<'a>(pub &'a MatchRow);

impl Display for Tuple<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let r = self.0;
    let fields: [Option<&str>; 9] = [
      r.inventor_first_name.as_deref(),
      Some(&r.roster_first_name),
      Some(&r.roster_surname),
      r.inventor_city.as_deref(),
      r.inventor_state.as_deref(),
      Some(&r.grantee_name),
      Some(&r.document_number),
      Some(&r.document_date),
      r.title_of_invention.as_deref(),
    ];

    f.write_char('(')?;
    for (i, field) in fields.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      match field {
        Some(s) => write!(f, "{s:?}")?,
        None => f.write_str("None")?,
      }
    }
    f.write_char(')')
  }
}

/// The full listing: header, legend, one line per row, then the count.
pub fn render(rows: &[MatchRow]) -> String {
  let mut out = format!("{HEADER}\n{LEGEND}\n");
  for row in rows {
    let _ = writeln!(out, "{}", Tuple(row));
  }
  let _ = writeln!(out, "Number of patents found: {}", rows.len());
  out
}
