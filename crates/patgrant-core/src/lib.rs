//! Core types and trait definitions for patgrant.
//!
//! This crate is free of database and document-format dependencies. The
//! schema normalizer, the SQLite store and the binaries all depend on it.

pub mod error;
pub mod matcher;
pub mod name;
pub mod record;
pub mod roster;
pub mod store;

pub use error::{Error, Result};
