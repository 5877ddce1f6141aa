//! Field mapping
//!
//! Maps a JSON response onto named outputs. Each output tries an ordered chain
//! of paths under a [`FallbackPolicy`] and may fall back to a default value.
//! Tables are plain serde data, so hosts can load them from configuration.

mod chain;
mod map;
mod policy;
mod spec;

pub use chain::resolve_chain;
pub use map::{FieldMap, FieldMapError};
pub use policy::FallbackPolicy;
pub use spec::FieldSpec;
