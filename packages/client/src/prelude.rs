//! Fieldpath prelude
//!
//! The types most callers need to extract fields from a response.

pub use crate::config::{ExtractorConfig, Validator};
pub use crate::error::{ExtractError, ExtractResult, PathError, PathResult};
pub use crate::extractor::{PathExtractor, extract, extract_as, extract_parsed};
pub use crate::fields::{FallbackPolicy, FieldMap, FieldMapError, FieldSpec, resolve_chain};
pub use crate::null_semantics::Extracted;
pub use crate::path::{PathExpression, PathSegment};
pub use crate::render::{to_display_string, value_to_display_string};
pub use crate::telemetry::{ExtractionStats, StatsSnapshot};
