//! SQLite backend for the patgrant record store.
//!
//! Synchronous [`rusqlite`] access over one connection; every write batch
//! runs in its own transaction.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
