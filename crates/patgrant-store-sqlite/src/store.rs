//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::{Connection, OpenFlags, types::Value};

use patgrant_core::{
  name::CanonicalName,
  record::{MatchRow, NormalizedGrant},
  store::{RecordStore, RosterSession},
};

use crate::{
  Error, Result,
  encode::{decode_match_row, decode_values, encode_uuid},
  schema::{ROSTER_SCHEMA, SCHEMA, TABLES},
};

/// Roster join. Bare columns come from the row holding the smallest
/// document number of each `(title, surname)` group.
pub(crate) const MATCH_SQL: &str = "
SELECT i.first_name, f.first_name, f.surname, i.city, i.state, g.name,
       p.document_number, p.document_date, p.title_of_invention,
       MIN(p.document_number)
FROM temp.roster_names f
JOIN inventors i
  ON i.surname = f.surname
 AND (f.first_name = '' OR instr(COALESCE(i.first_name, ''), f.first_name) > 0)
JOIN grantees g ON g.document_number = i.document_number
JOIN patents  p ON p.document_number = g.document_number
WHERE f.session_id = ?1
  AND instr(g.name, ?2) > 0
GROUP BY p.title_of_invention, f.surname
ORDER BY f.surname ASC, p.title_of_invention ASC";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A patent store backed by a single SQLite file.
///
/// Roster sessions live in a `TEMP` table, so they are private to this
/// connection.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn create(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self { conn: Connection::open(path)? };
    store.init_schema()?;
    Ok(store)
  }

  /// Open an existing store read-write. Does not create the file.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(Error::StoreNotFound(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
      path,
      OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(Self { conn })
  }

  /// Open an in-memory store, mostly for tests.
  pub fn open_in_memory() -> Result<Self> {
    let store = Self { conn: Connection::open_in_memory()? };
    store.init_schema()?;
    Ok(store)
  }

  /// Run an arbitrary read query.
  ///
  /// A query that fails to prepare or execute is logged and yields `None`.
  pub fn read_query(&self, sql: &str) -> Option<Vec<Vec<Value>>> {
    let result = self.conn.prepare(sql).and_then(|mut stmt| {
      let width = stmt.column_count();
      let rows = stmt
        .query_map([], |row| decode_values(row, width))?
        .collect::<rusqlite::Result<Vec<_>>>();
      rows
    });
    match result {
      Ok(rows) => Some(rows),
      Err(e) => {
        tracing::error!("invalid query: {e}");
        None
      }
    }
  }

  /// Number of rows in one of the patent tables.
  pub fn count(&self, table: &str) -> Result<u64> {
    if !TABLES.contains(&table) {
      return Err(Error::UnknownTable(table.to_owned()));
    }
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let n: i64 = self.conn.query_row(&sql, [], |r| r.get(0))?;
    Ok(n as u64)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  fn init_schema(&self) -> Result<()> {
    self.conn.execute_batch(SCHEMA)?;
    Ok(())
  }

  // ── Grants: append-only writes ────────────────────────────────────────────

  fn insert_grants(&self, grants: &[NormalizedGrant]) -> Result<usize> {
    let tx = self.conn.unchecked_transaction()?;
    {
      let mut patents = tx.prepare_cached(
        "INSERT INTO patents (
           document_number, sir_flag, document_kind, document_date,
           application_filing_data, national_main_classifications,
           title_of_invention, not_new_invention_flag
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
      )?;
      let mut inventors = tx.prepare_cached(
        "INSERT INTO inventors (document_number, first_name, surname, city, state, country)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
      )?;
      let mut grantees = tx.prepare_cached(
        "INSERT INTO grantees (document_number, name, city, state, country, type)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
      )?;

      for grant in grants {
        let p = &grant.patent;
        patents.execute(rusqlite::params![
          p.document_number,
          p.sir_flag,
          p.document_kind,
          p.document_date,
          p.application_filing_date,
          p.national_main_classification,
          p.title_of_invention,
          p.not_new_invention_flag,
        ])?;

        for i in &grant.inventors {
          inventors.execute(rusqlite::params![
            i.document_number,
            i.first_name,
            i.surname,
            i.city,
            i.state,
            i.country,
          ])?;
        }

        for g in &grant.grantees {
          grantees.execute(rusqlite::params![
            g.document_number,
            g.name,
            g.city,
            g.state,
            g.country,
            g.kind,
          ])?;
        }
      }
    }
    tx.commit()?;
    Ok(grants.len())
  }

  // ── Roster sessions ───────────────────────────────────────────────────────

  fn open_roster(&self) -> Result<RosterSession> {
    self.conn.execute_batch(ROSTER_SCHEMA)?;
    Ok(RosterSession::new())
  }

  fn insert_roster(&self, session: &RosterSession, names: &[CanonicalName]) -> Result<usize> {
    let session_id = encode_uuid(session.id());

    let tx = self.conn.unchecked_transaction()?;
    {
      let mut stmt = tx.prepare_cached(
        "INSERT INTO temp.roster_names (session_id, first_name, surname) VALUES (?1, ?2, ?3)",
      )?;
      for name in names {
        stmt.execute(rusqlite::params![session_id, name.first_name, name.surname])?;
      }
    }
    tx.commit()?;
    Ok(names.len())
  }

  fn match_roster(&self, session: &RosterSession, institution: &str) -> Result<Vec<MatchRow>> {
    let session_id = encode_uuid(session.id());

    let mut stmt = self.conn.prepare(MATCH_SQL)?;
    let rows = stmt
      .query_map(rusqlite::params![session_id, institution], decode_match_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn close_roster(&self, session: RosterSession) -> Result<()> {
    let session_id = encode_uuid(session.id());
    self.conn.execute(
      "DELETE FROM temp.roster_names WHERE session_id = ?1",
      rusqlite::params![session_id],
    )?;
    Ok(())
  }
}
