//! # Fieldpath client
//!
//! Dotted/bracketed path extraction over JSON API responses.
//!
//! Paths such as `data[0].attributes.code` are resolved segment by segment
//! against a [`serde_json::Value`]. Resolution never fails loudly: a path that
//! is malformed or does not match the document yields
//! [`Extracted::Absent`](null_semantics::Extracted::Absent), which is kept
//! distinct from a present JSON `null`.
//!
//! ## Usage
//!
//! ```rust
//! use fieldpath_client::prelude::*;
//! use serde_json::json;
//!
//! let response = json!({
//!     "data": {
//!         "id": 1207,
//!         "attributes": {"code": "HERO_01", "description": null}
//!     }
//! });
//!
//! assert_eq!(extract(&response, "data.attributes.code").value(), Some(&json!("HERO_01")));
//! assert!(extract(&response, "data.attributes.description").is_null());
//! assert!(extract(&response, "data.relationships.project").is_absent());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod fields;
pub mod null_semantics;
pub mod path;
pub mod prelude;
pub mod render;
pub mod telemetry;

pub use config::ExtractorConfig;
pub use error::{ExtractError, PathError};
pub use extractor::{PathExtractor, extract, extract_as, extract_parsed};
pub use fields::{FallbackPolicy, FieldMap, FieldSpec};
pub use null_semantics::Extracted;
pub use path::{PathExpression, PathSegment};
