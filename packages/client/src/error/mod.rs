//! Error handling for path parsing and typed extraction
//!
//! Path resolution failure is not an error: it is reported as
//! [`Extracted::Absent`](crate::null_semantics::Extracted::Absent). The types here
//! cover the cases where a caller asked for a diagnostic or a typed value.

mod types;

pub use types::{ExtractError, ExtractResult, PathError, PathResult};
