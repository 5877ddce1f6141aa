//! Path expressions
//!
//! A path is a dot-separated list of segments:
//! - `name` looks up a mapping key
//! - `name[3]` looks up a key, then indexes the resulting sequence
//! - `[3]` indexes the root sequence (first segment only)

mod parser;
mod segment;

pub use segment::{PathExpression, PathSegment};
