//! `gridmatch-model` defines the value model shared by the lookup engine and
//! its callers.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the lookup/match engine (comparison, search, projection)
//! - host formula layers and IPC boundaries via `serde` (JSON-safe schema)

mod composite;
mod error;
mod value;

pub use composite::{CompositeError, CompositeValue};
pub use error::ErrorKind;
pub use value::ScalarValue;
