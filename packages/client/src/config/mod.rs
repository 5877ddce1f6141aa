//! Extractor configuration
//!
//! Limits applied by [`PathExtractor`](crate::extractor::PathExtractor) before
//! resolving a path. The default configuration accepts any path the grammar
//! accepts, up to generous depth and key-length bounds.

mod extractor;
pub mod validation;

pub use extractor::ExtractorConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
