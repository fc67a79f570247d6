//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout Vocalis.
//! All errors are structured and map to specific error codes.
//!
//! # Error Categories
//! - `NotANumber` / `BelowMinimum` / `AboveMaximum`: limit parameter failures
//! - `MalformedEntry` / `EmptySequenceList`: exclusion grammar failures
//! - `Store`: row-store (SQLite) failures
//!
//! The `Display` text of the client-input variants is part of the HTTP
//! contract: existing clients match on these strings, so they must not
//! change. Store errors are never shown to clients; the HTTP layer logs
//! the detail and responds with a generic 500 body.

use thiserror::Error;

/// Main error type for Vocalis operations
#[derive(Error, Debug)]
pub enum VocalisError {
    /// Limit parameter failed integer parsing
    #[error("'limit' must be a number: {0}")]
    NotANumber(String),

    /// Limit parameter below the inclusive minimum of 1
    #[error("'limit' must be greater or equal to 1")]
    BelowMinimum,

    /// Limit parameter above the inclusive maximum of 100
    #[error("'limit' must be less or equal to 100")]
    AboveMaximum,

    /// Exclusion entry is not in `id=sequences` form
    #[error("'excluded' must be in format id=sequence1,sequence2;id2=sequence3,sequence4: {0}")]
    MalformedEntry(String),

    /// Exclusion entry has an id but no surviving sequence token
    #[error("'excluded' must have at least one sequence for id {id}: {entry}")]
    EmptySequenceList { id: String, entry: String },

    /// Row-store failure (connection, prepare, query, decode)
    #[error("Store error: {0}")]
    Store(String),
}

impl VocalisError {
    /// Convert error to a stable error code string
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotANumber(_) => "NOT_A_NUMBER",
            Self::BelowMinimum => "BELOW_MINIMUM",
            Self::AboveMaximum => "ABOVE_MAXIMUM",
            Self::MalformedEntry(_) => "MALFORMED_ENTRY",
            Self::EmptySequenceList { .. } => "EMPTY_SEQUENCE_LIST",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Whether this error was caused by client input (HTTP 400) as opposed
    /// to a server-side store failure (HTTP 500)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

/// Result type alias for Vocalis operations
pub type Result<T> = std::result::Result<T, VocalisError>;
