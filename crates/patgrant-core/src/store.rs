//! The `RecordStore` trait and roster sessions.
//!
//! The trait is implemented by storage backends (e.g.
//! `patgrant-store-sqlite`). The ingestion pipeline and the match engine
//! depend on this abstraction, not on any concrete backend.

use uuid::Uuid;

use crate::{
  name::CanonicalName,
  record::{MatchRow, NormalizedGrant},
};

// ─── Sessions ────────────────────────────────────────────────────────────────

/// Handle to the cleaned roster names of one match query.
///
/// Rows inserted under a session are only visible to queries made with the
/// same handle. Not `Clone`: closing consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct RosterSession {
  id: Uuid,
}

impl RosterSession {
  pub fn new() -> Self { Self { id: Uuid::new_v4() } }

  pub fn id(&self) -> Uuid { self.id }
}

impl Default for RosterSession {
  fn default() -> Self { Self::new() }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the relational patent store.
///
/// Patents, inventors and grantees are append-only. Roster names are
/// session-scoped and removed by [`RecordStore::close_roster`].
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the patent tables if they do not exist yet.
  fn init_schema(&self) -> Result<(), Self::Error>;

  /// Persist a batch of normalized documents atomically and return the
  /// number of patents written.
  fn insert_grants(&self, grants: &[NormalizedGrant]) -> Result<usize, Self::Error>;

  // ── Roster sessions ──────────────────────────────────────────────────

  /// Prepare storage for a new roster and return its session handle.
  fn open_roster(&self) -> Result<RosterSession, Self::Error>;

  fn insert_roster(
    &self,
    session: &RosterSession,
    names: &[CanonicalName],
  ) -> Result<usize, Self::Error>;

  /// Join the session's roster against inventors and grantees.
  ///
  /// A row is produced when an inventor's surname equals a roster surname,
  /// the inventor's first name contains the roster first-name token, and a
  /// grantee of the same patent has a name containing `institution`. Rows are
  /// unique per `(title_of_invention, roster_surname)` and ordered by roster
  /// surname.
  fn match_roster(
    &self,
    session: &RosterSession,
    institution: &str,
  ) -> Result<Vec<MatchRow>, Self::Error>;

  /// Drop every roster name held under `session`.
  fn close_roster(&self, session: RosterSession) -> Result<(), Self::Error>;
}
