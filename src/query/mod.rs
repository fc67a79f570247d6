//! Parameterized Query Construction
//!
//! This module turns a validated `(limit, exclusion set)` pair into a
//! single immutable [`BoundQuery`]: SQL text plus the ordered bind values
//! that fill its placeholders.
//!
//! # Placeholder/Bind Alignment
//! For each retained exclusion entry, in map insertion order, the builder
//! emits `(t.speaker_id = ? AND t.sequence IN (?, ...))` with one
//! placeholder per sequence, joins the clauses with `OR`, and negates the
//! whole disjunction. Bind values follow the same nested order (speaker id,
//! then its sequences) with the limit appended last. An empty exclusion set
//! produces no WHERE clause and a bind list of exactly `[limit]`.
//!
//! Row selection is `ORDER BY RANDOM()` over the filtered set: a full-scan
//! uniform sample, capped at `limit` rows.

use rusqlite::types::{ToSql, ToSqlOutput};

use crate::validate::ExclusionSet;

/// Base SELECT joining transcripts with their speaker metadata
const BASE_SELECT: &str = "SELECT t.transcript, t.sequence, t.speaker_id, \
     s.age, s.gender, s.accent, s.region \
     FROM transcripts t \
     JOIN speakers s ON t.speaker_id = s.id";

/// A positional bind value for a prepared statement
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// Speaker id or sequence id
    Text(String),
    /// The trailing LIMIT value
    Int(i64),
}

impl ToSql for BindValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => s.to_sql(),
            Self::Int(n) => n.to_sql(),
        }
    }
}

/// An immutable (SQL text, ordered bind values) pair
///
/// Built once per request and never mutated or reused across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    /// SQL text with `?` placeholders
    pub sql: String,
    /// Bind values in placeholder order
    pub binds: Vec<BindValue>,
}

/// Build the sampling query for a validated limit and exclusion set
#[must_use]
pub fn build_query(limit: i64, excluded: &ExclusionSet) -> BoundQuery {
    let mut sql = String::from(BASE_SELECT);
    let mut binds: Vec<BindValue> = Vec::new();

    // Re-check the parser invariant that every entry has sequences; an
    // entry with none would emit `IN ()` and break the statement.
    let entries: Vec<_> = excluded.iter().filter(|(_, seqs)| !seqs.is_empty()).collect();

    if !entries.is_empty() {
        sql.push_str(" WHERE NOT (");
        for (i, (speaker, sequences)) in entries.iter().enumerate() {
            if i > 0 {
                sql.push_str(" OR ");
            }
            sql.push_str("(t.speaker_id = ? AND t.sequence IN (");
            binds.push(BindValue::Text((*speaker).clone()));
            for (j, sequence) in sequences.iter().enumerate() {
                if j > 0 {
                    sql.push_str(", ");
                }
                sql.push('?');
                binds.push(BindValue::Text(sequence.clone()));
            }
            sql.push_str("))");
        }
        sql.push(')');
    }

    sql.push_str(" ORDER BY RANDOM() LIMIT ?");
    binds.push(BindValue::Int(limit));

    BoundQuery { sql, binds }
}
