//! SQLite Row Store
//!
//! This module executes bound sampling queries against the transcript
//! corpus database.
//!
//! # Stateless Design
//! The store keeps only the database path. Each call opens a read-only
//! connection, runs one query, and closes the connection on drop — no
//! pooling, no cross-request state.
//!
//! # Implementation Notes
//! - Uses `rusqlite` (synchronous driver, no async needed)
//! - The nullable `region` column decodes to `Option<String>` so an absent
//!   region round-trips as JSON `null`, never an empty string
//! - Store failures are wrapped and propagated; this module does not retry
//!   and does not log

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Row};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VocalisError};
use crate::query::BoundQuery;

/// One sampled transcript row joined with its speaker metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Transcript text
    pub transcript: String,

    /// Sequence identifier within the speaker's recordings
    pub sequence: String,

    /// Speaker identifier
    pub speaker: String,

    /// Speaker age
    pub age: i64,

    /// Speaker gender
    pub gender: String,

    /// Speaker accent
    pub accent: String,

    /// Speaker region; nullable in the corpus, serialised as explicit null
    pub region: Option<String>,
}

/// Row-store seam for the sampling endpoint
///
/// The HTTP layer depends on this trait rather than on `rusqlite` directly,
/// so tests can substitute a failing or canned store.
pub trait TranscriptStore: Send + Sync {
    /// Execute a bound sampling query and decode the resulting rows
    fn sample(&self, query: &BoundQuery) -> Result<Vec<TranscriptRecord>>;
}

/// `SQLite`-backed transcript store
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create a store for the database at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying database file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptStore for SqliteStore {
    fn sample(&self, query: &BoundQuery) -> Result<Vec<TranscriptRecord>> {
        let conn = open_connection(&self.path)?;

        let mut stmt = conn
            .prepare(&query.sql)
            .map_err(|e| VocalisError::store(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(query.binds.iter()), row_to_record)
            .map_err(|e| VocalisError::store(format!("Failed to execute query: {e}")))?;

        rows.collect::<std::result::Result<Vec<TranscriptRecord>, _>>()
            .map_err(|e| VocalisError::store(format!("Failed to fetch row: {e}")))
    }
}

/// Open a read-only `SQLite` connection
fn open_connection(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(|e| VocalisError::store(format!("Failed to open database: {e}")))
}

/// Decode one result row in SELECT column order
fn row_to_record(row: &Row) -> std::result::Result<TranscriptRecord, rusqlite::Error> {
    Ok(TranscriptRecord {
        transcript: row.get(0)?,
        sequence: row.get(1)?,
        speaker: row.get(2)?,
        age: row.get(3)?,
        gender: row.get(4)?,
        accent: row.get(5)?,
        region: row.get::<_, Option<String>>(6)?,
    })
}
