//! The match engine: scans a normalized lookup vector under a match mode and
//! a search mode, returning the matching index or [`MatchResult::NotFound`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use gridmatch_model::{ErrorKind, ScalarValue};

use crate::compare::{self, CompareClass};
use crate::normalize::LookupVector;

/// Match policy, accepted from the spreadsheet argument codes via
/// `TryFrom<i64>` (`0`, `-1`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Only exact equality matches.
    Exact,
    /// Exact match, or the largest candidate strictly smaller than the value.
    ExactOrNextSmaller,
    /// Exact match, or the smallest candidate strictly larger than the value.
    ExactOrNextLarger,
    /// Exact match via the pluggable wildcard predicate; plain equality when
    /// no predicate is supplied.
    ExactWildcard,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Exact
    }
}

impl TryFrom<i64> for MatchMode {
    type Error = ErrorKind;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MatchMode::Exact),
            -1 => Ok(MatchMode::ExactOrNextSmaller),
            1 => Ok(MatchMode::ExactOrNextLarger),
            2 => Ok(MatchMode::ExactWildcard),
            _ => Err(ErrorKind::Value),
        }
    }
}

/// Scan order, accepted from the spreadsheet argument codes via `TryFrom<i64>`
/// (`1`, `-1`, `2`, `-2`).
///
/// The binary modes are accepted but run as a first-to-last scan: the linear
/// scan never assumes sorted input, and silently requiring it would change
/// results for callers that pass unsorted data. The downgrade is logged once
/// per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    FirstToLast,
    LastToFirst,
    BinaryAscending,
    BinaryDescending,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::FirstToLast
    }
}

impl TryFrom<i64> for SearchMode {
    type Error = ErrorKind;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SearchMode::FirstToLast),
            -1 => Ok(SearchMode::LastToFirst),
            2 => Ok(SearchMode::BinaryAscending),
            -2 => Ok(SearchMode::BinaryDescending),
            _ => Err(ErrorKind::Value),
        }
    }
}

/// Outcome of a vector scan. `Found` carries the index into the scanned
/// vector, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Found(usize),
    NotFound,
}

/// Pluggable wildcard-equality test consulted only in
/// [`MatchMode::ExactWildcard`].
///
/// The engine ships no pattern syntax of its own; a host layer that supports
/// wildcards supplies the predicate. Candidates whose compare class differs
/// from the lookup value's are skipped before the predicate is consulted.
pub trait WildcardPredicate {
    fn matches(&self, lookup: &ScalarValue, candidate: &ScalarValue) -> bool;
}

/// [`search_with`] without a wildcard predicate.
pub fn search(
    value: &ScalarValue,
    vector: &LookupVector,
    match_mode: MatchMode,
    search_mode: SearchMode,
) -> MatchResult {
    search_with(value, vector, match_mode, search_mode, None)
}

/// Scans `vector` for `value` under `match_mode`, visiting candidates in the
/// order given by `search_mode`. First match wins in the exact modes; in the
/// approximate modes an exact match still wins immediately, otherwise the
/// closest eligible candidate is kept, ties favoring the earliest visited.
pub fn search_with(
    value: &ScalarValue,
    vector: &LookupVector,
    match_mode: MatchMode,
    search_mode: SearchMode,
    wildcard: Option<&dyn WildcardPredicate>,
) -> MatchResult {
    let len = vector.len();
    match search_mode {
        SearchMode::FirstToLast => scan(value, vector, match_mode, wildcard, 0..len),
        SearchMode::LastToFirst => scan(value, vector, match_mode, wildcard, (0..len).rev()),
        SearchMode::BinaryAscending | SearchMode::BinaryDescending => {
            warn_binary_fallback(search_mode);
            scan(value, vector, match_mode, wildcard, 0..len)
        }
    }
}

fn scan<'v>(
    value: &ScalarValue,
    vector: &'v LookupVector,
    match_mode: MatchMode,
    wildcard: Option<&dyn WildcardPredicate>,
    indices: impl Iterator<Item = usize>,
) -> MatchResult {
    let entries = vector.entries();
    let mut best: Option<(usize, &'v ScalarValue)> = None;
    for index in indices {
        let candidate = &entries[index].value;
        if compare::compare_class(value, candidate) == CompareClass::Mixed {
            continue;
        }
        match match_mode {
            MatchMode::Exact => {
                if compare::equals(value, candidate) {
                    return MatchResult::Found(index);
                }
            }
            MatchMode::ExactWildcard => {
                let matched = match wildcard {
                    Some(predicate) => predicate.matches(value, candidate),
                    None => compare::equals(value, candidate),
                };
                if matched {
                    return MatchResult::Found(index);
                }
            }
            MatchMode::ExactOrNextSmaller => match compare::order(value, candidate) {
                Some(Ordering::Equal) => return MatchResult::Found(index),
                Some(Ordering::Greater) => {
                    // Candidate is below the value; keep the largest one seen.
                    let better = match best {
                        None => true,
                        Some((_, held)) => compare::order(candidate, held) == Some(Ordering::Greater),
                    };
                    if better {
                        best = Some((index, candidate));
                    }
                }
                _ => {}
            },
            MatchMode::ExactOrNextLarger => match compare::order(value, candidate) {
                Some(Ordering::Equal) => return MatchResult::Found(index),
                Some(Ordering::Less) => {
                    // Candidate is above the value; keep the smallest one seen.
                    let better = match best {
                        None => true,
                        Some((_, held)) => compare::order(candidate, held) == Some(Ordering::Less),
                    };
                    if better {
                        best = Some((index, candidate));
                    }
                }
                _ => {}
            },
        }
    }
    match best {
        Some((index, _)) => MatchResult::Found(index),
        None => MatchResult::NotFound,
    }
}

fn warn_binary_fallback(mode: SearchMode) {
    use std::sync::atomic::{AtomicBool, Ordering};
    static WARNED: AtomicBool = AtomicBool::new(false);
    if !WARNED.swap(true, Ordering::Relaxed) {
        log::warn!("search mode {mode:?} is not implemented; scanning first-to-last instead");
    }
}
