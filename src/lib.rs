//! Vocalis - Random Transcript Sampling Service
//!
//! Vocalis serves uniform random samples from a two-table transcript corpus
//! (transcripts joined with speaker metadata) over HTTP. Callers can cap
//! the result count with `limit` and omit arbitrary speaker/sequence
//! combinations with the `excluded` filter grammar.
//!
//! # Core Principles
//! - Per-request state only (every request builds its own exclusion set,
//!   bound query, and result list)
//! - Parameterized queries throughout (no string-spliced values)
//! - First-error-wins validation with literal, client-facing messages
//! - Store detail never leaves the process; clients see a generic 500
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`validate`] - Limit validation and the exclusion grammar parser
//! - [`query`] - Parameterized query construction
//! - [`store`] - SQLite row store and record decoding
//! - [`server`] - Axum HTTP layer

pub mod error;
pub mod validate;
pub mod query;
pub mod store;
pub mod server;

// Re-export commonly used types for convenience
pub use error::{Result, VocalisError};
pub use query::{build_query, BindValue, BoundQuery};
pub use server::{build_router, start, AppState, ServerConfig, ServerHandle};
pub use store::{SqliteStore, TranscriptRecord, TranscriptStore};
pub use validate::{parse_excluded, parse_limit, validate, ExclusionSet};
