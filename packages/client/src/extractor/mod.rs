//! Path extraction
//!
//! [`extract`] is the pure entry point: parse, resolve, and report
//! [`Extracted::Absent`](crate::null_semantics::Extracted::Absent) on any
//! failure. [`PathExtractor`] adds configured limits and shared statistics.

mod core;
mod resolve;

pub use self::core::PathExtractor;
pub use resolve::{extract, extract_as, extract_parsed};
