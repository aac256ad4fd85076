//! SQL schema for the patgrant SQLite store.

/// Patent tables; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Column names follow the historical database layout, including
/// `application_filing_data` and `national_main_classifications`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

-- One row per grant; never updated or deleted.
CREATE TABLE IF NOT EXISTS patents (
    document_number               TEXT PRIMARY KEY,
    sir_flag                      BOOLEAN NOT NULL,
    document_kind                 TEXT,
    document_date                 TEXT NOT NULL,
    application_filing_data       TEXT NOT NULL,
    national_main_classifications TEXT,
    title_of_invention            TEXT,
    not_new_invention_flag        BOOLEAN NOT NULL
);

-- At least one row per patent.
CREATE TABLE IF NOT EXISTS inventors (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    document_number TEXT NOT NULL REFERENCES patents(document_number),
    first_name      TEXT,
    surname         TEXT,
    city            TEXT,
    state           TEXT,
    country         TEXT
);

CREATE TABLE IF NOT EXISTS grantees (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    document_number TEXT NOT NULL REFERENCES patents(document_number),
    name            TEXT,
    city            TEXT,
    state           TEXT,
    country         TEXT,
    type            TEXT     -- assignee role code
);

CREATE INDEX IF NOT EXISTS inventors_surname_idx  ON inventors(surname);
CREATE INDEX IF NOT EXISTS inventors_document_idx ON inventors(document_number);
CREATE INDEX IF NOT EXISTS grantees_document_idx  ON grantees(document_number);
";

/// Connection-local roster names, one set per match session.
pub const ROSTER_SCHEMA: &str = "
CREATE TEMP TABLE IF NOT EXISTS roster_names (
    id         INTEGER PRIMARY KEY,
    session_id TEXT NOT NULL,
    first_name TEXT NOT NULL,
    surname    TEXT NOT NULL
);
";

/// Tables [`crate::SqliteStore::count`] accepts.
pub const TABLES: &[&str] = &["patents", "inventors", "grantees"];
