//! Absent vs null semantics
//!
//! A JSON `null` found at a path is a present value. A path that cannot be
//! resolved is absent. The two are never conflated: [`Extracted`] carries them
//! as separate variants.

mod conversion;
mod extracted;

pub use extracted::Extracted;
