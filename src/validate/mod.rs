//! Request Parameter Validation
//!
//! This module implements the validation pipeline for the two optional
//! sampling parameters: `limit` and `excluded`.
//!
//! # Validation Strategy
//! - Pure functions over raw input strings (no I/O, no side effects)
//! - Explicit `Result` returns so first-error-wins sequencing is a visible
//!   control-flow branch, not an implicit control transfer
//! - `limit` is evaluated first; if it fails, the exclusion text is never
//!   inspected
//!
//! # Exclusion Grammar
//! ```text
//! exclusion_string := entry (";" entry)*
//! entry            := id "=" sequence_list
//! sequence_list    := seq ("," seq)*
//! ```
//! Blank entries (stray or trailing `;`) are skipped. Sequence tokens are
//! trimmed, blank tokens dropped, and the remainder deduplicated in
//! first-seen order. An entry whose token list survives as empty is an
//! error, never a stored empty set.

use indexmap::{IndexMap, IndexSet};

use crate::error::{Result, VocalisError};

/// Inclusive lower bound for the `limit` parameter
pub const MIN_LIMIT: i64 = 1;

/// Inclusive upper bound for the `limit` parameter
pub const MAX_LIMIT: i64 = 100;

/// Limit applied when the parameter is absent or empty
pub const DEFAULT_LIMIT: i64 = 1;

/// Parsed exclusion filter: speaker id → sequence ids to omit
///
/// Keys keep insertion order and every key maps to a non-empty set, so the
/// query builder can lay out placeholders and bind values deterministically.
pub type ExclusionSet = IndexMap<String, IndexSet<String>>;

/// Parse and bounds-check the `limit` parameter
///
/// Absent or empty input yields [`DEFAULT_LIMIT`]. Parsing uses
/// leading-integer semantics: optional leading whitespace and sign, then as
/// many digits as follow, ignoring any trailing text. `"50.5"` therefore
/// parses to `50` rather than being rejected.
pub fn parse_limit(raw: Option<&str>) -> Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };
    if raw.is_empty() {
        return Ok(DEFAULT_LIMIT);
    }

    let Some(value) = leading_integer(raw) else {
        return Err(VocalisError::NotANumber(raw.to_string()));
    };

    if value < MIN_LIMIT {
        return Err(VocalisError::BelowMinimum);
    }
    if value > MAX_LIMIT {
        return Err(VocalisError::AboveMaximum);
    }

    Ok(value)
}

/// Extract the leading integer from a string, if any
///
/// Returns `None` when no digit follows the optional whitespace/sign
/// prefix. Values too large for `i64` clamp to the i64 extremes; the bounds
/// check in [`parse_limit`] rejects them either way.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();

    let (negative, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    match digits.parse::<i64>() {
        Ok(n) => Some(if negative { -n } else { n }),
        Err(_) => Some(if negative { i64::MIN } else { i64::MAX }),
    }
}

/// Parse the `excluded` parameter into an [`ExclusionSet`]
///
/// Absent or empty input yields the empty set (no error). The first
/// malformed entry aborts the parse; error messages echo the entry's
/// original, untrimmed text.
pub fn parse_excluded(raw: Option<&str>) -> Result<ExclusionSet> {
    let mut excluded = ExclusionSet::new();

    let Some(raw) = raw else {
        return Ok(excluded);
    };
    if raw.is_empty() {
        return Ok(excluded);
    }

    for entry in raw.split(';') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            // Tolerate stray/trailing separators
            continue;
        }

        // Any '='-delimited segments beyond the first two are dropped,
        // matching the original service (see tests for the quirk).
        let mut parts = trimmed.split('=');
        let id = parts.next().unwrap_or("");
        let sequence_text = parts.next().unwrap_or("");

        if id.is_empty() || sequence_text.is_empty() {
            return Err(VocalisError::MalformedEntry(entry.to_string()));
        }

        let sequences: IndexSet<String> = sequence_text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if sequences.is_empty() {
            return Err(VocalisError::EmptySequenceList {
                id: id.to_string(),
                entry: entry.to_string(),
            });
        }

        // Duplicate ids: the later entry replaces the earlier sequence set
        // outright. No merge.
        excluded.insert(id.to_string(), sequences);
    }

    Ok(excluded)
}

/// Run the full validation pipeline over both raw parameters
///
/// `limit` is checked first and short-circuits; the exclusion parser is
/// never invoked for a request with an invalid limit.
pub fn validate(
    raw_limit: Option<&str>,
    raw_excluded: Option<&str>,
) -> Result<(i64, ExclusionSet)> {
    let limit = parse_limit(raw_limit)?;
    let excluded = parse_excluded(raw_excluded)?;
    Ok((limit, excluded))
}
