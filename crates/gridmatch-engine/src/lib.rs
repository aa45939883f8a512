#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Spreadsheet-style lookup/match engine (XLOOKUP semantics) over
//! already-evaluated value grids.
//!
//! The pipeline is normalize → search → project: `normalize()` turns the raw
//! 2-D arguments into a lookup vector plus a row-major return matrix,
//! `search()` scans the vector under a [`MatchMode`]/[`SearchMode`] pair, and
//! `project()` maps the matched position back into the return matrix. The
//! `lookup()` entry point ties the three together and applies the
//! `if_not_found` fallback; `match_position()` is the position-only variant.
//!
//! Comparison follows spreadsheet rules. Numbers compare numerically and all
//! other values compare as case-insensitive text; the two classes never
//! cross. Shape defects surface as [`ErrorKind::Ref`], projection bounds
//! defects as [`ErrorKind::Value`], and a miss without a usable fallback as
//! [`ErrorKind::NotAvailable`].

pub mod compare;
pub mod lookup;
pub mod normalize;
pub mod project;
pub mod search;

pub use gridmatch_model::{CompositeError, CompositeValue, ErrorKind, ScalarValue};

pub use compare::{compare_class, equals, order, CompareClass};
pub use lookup::{lookup, lookup_with, match_position, LookupOptions};
pub use normalize::{
    normalize, normalize_lookup, ArgValue, LookupEntry, LookupVector, Orientation, ReturnMatrix,
    ShapeError,
};
pub use project::{project, Projection, RangeError};
pub use search::{search, search_with, MatchMode, MatchResult, SearchMode, WildcardPredicate};
