//! Entry points tying normalization, search and projection together, plus the
//! mapping from internal defects onto the external error vocabulary.

use serde::{Deserialize, Serialize};

use gridmatch_model::{ErrorKind, ScalarValue};

use crate::normalize::{self, ArgValue};
use crate::project::{self, Projection};
use crate::search::{self, MatchMode, MatchResult, SearchMode, WildcardPredicate};

/// Lookup policy. `Default` is an exact, first-to-last lookup with no
/// fallback.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    pub match_mode: MatchMode,
    pub search_mode: SearchMode,
    /// Returned instead of the no-match error when it is a concrete scalar
    /// (text or number); any other fallback is treated as absent.
    pub if_not_found: Option<ScalarValue>,
}

/// Looks `value` up in `lookup_array` and projects the match out of
/// `return_array`, flattening composite results to their joined text.
///
/// This is the external boundary form: the calling layer expects one display
/// value, not an array. Shape defects surface as [`ErrorKind::Ref`],
/// projection bounds defects as [`ErrorKind::Value`], and a miss without a
/// usable fallback as [`ErrorKind::NotAvailable`].
pub fn lookup(
    value: &ScalarValue,
    lookup_array: &ArgValue,
    return_array: &ArgValue,
    options: &LookupOptions,
) -> Result<ScalarValue, ErrorKind> {
    lookup_with(value, lookup_array, return_array, options, None).map(Projection::into_scalar)
}

/// Full-control lookup: keeps composite results structured and accepts a
/// wildcard predicate for [`MatchMode::ExactWildcard`].
pub fn lookup_with(
    value: &ScalarValue,
    lookup_array: &ArgValue,
    return_array: &ArgValue,
    options: &LookupOptions,
    wildcard: Option<&dyn WildcardPredicate>,
) -> Result<Projection, ErrorKind> {
    let (vector, matrix, orientation) =
        normalize::normalize(lookup_array, return_array).map_err(|_| ErrorKind::Ref)?;
    match search::search_with(
        value,
        &vector,
        options.match_mode,
        options.search_mode,
        wildcard,
    ) {
        MatchResult::Found(index) => {
            let position = vector.position(index).ok_or(ErrorKind::Value)?;
            project::project(position, &matrix, orientation).map_err(|_| ErrorKind::Value)
        }
        MatchResult::NotFound => match &options.if_not_found {
            Some(fallback)
                if matches!(fallback, ScalarValue::Text(_) | ScalarValue::Number(_)) =>
            {
                Ok(Projection::Scalar(fallback.clone()))
            }
            _ => Err(ErrorKind::NotAvailable),
        },
    }
}

/// Position-only lookup over just the lookup array.
///
/// Returns the matched entry's original 0-based position along its source
/// axis; a miss is [`ErrorKind::NotAvailable`].
pub fn match_position(
    value: &ScalarValue,
    lookup_array: &ArgValue,
    match_mode: MatchMode,
    search_mode: SearchMode,
) -> Result<usize, ErrorKind> {
    let (vector, _) = normalize::normalize_lookup(lookup_array).map_err(|_| ErrorKind::Ref)?;
    match search::search(value, &vector, match_mode, search_mode) {
        MatchResult::Found(index) => vector.position(index).ok_or(ErrorKind::Value),
        MatchResult::NotFound => Err(ErrorKind::NotAvailable),
    }
}
