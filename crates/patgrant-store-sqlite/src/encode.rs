//! Conversions between domain types and SQLite column values.
//!
//! Absent attributes are stored as `NULL`. Session ids are stored as
//! hyphenated lowercase UUID strings.

use patgrant_core::record::MatchRow;
use rusqlite::{Row, types::Value};
use uuid::Uuid;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

/// Map a row of [`crate::store::MATCH_SQL`] in column order.
pub fn decode_match_row(row: &Row<'_>) -> rusqlite::Result<MatchRow> {
  Ok(MatchRow {
    inventor_first_name: row.get(0)?,
    roster_first_name:   row.get(1)?,
    roster_surname:      row.get(2)?,
    inventor_city:       row.get(3)?,
    inventor_state:      row.get(4)?,
    grantee_name:        row.get(5)?,
    document_number:     row.get(6)?,
    document_date:       row.get(7)?,
    title_of_invention:  row.get(8)?,
  })
}

/// The first `width` columns of a row as dynamically typed values.
pub fn decode_values(row: &Row<'_>, width: usize) -> rusqlite::Result<Vec<Value>> {
  (0..width).map(|i| row.get::<_, Value>(i)).collect()
}
