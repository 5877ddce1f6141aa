//! Ordered table of output fields

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::spec::FieldSpec;
use crate::error::PathError;
use crate::extractor::PathExtractor;
use crate::path::PathExpression;

/// Field table loading errors
#[derive(Debug, thiserror::Error)]
pub enum FieldMapError {
    #[error("field table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("output `{0}` is defined more than once")]
    DuplicateOutput(String),

    #[error("output `{0}` has neither paths nor a default")]
    Unresolvable(String),

    #[error("output `{output}` has an invalid path: {source}")]
    InvalidPath {
        output: String,
        #[source]
        source: PathError,
    },
}

/// Ordered set of [`FieldSpec`]s with unique output names
///
/// Serializes as a plain JSON array of specs; deserializing validates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldSpec>", into = "Vec<FieldSpec>")]
pub struct FieldMap {
    specs: Vec<FieldSpec>,
    outputs: HashSet<String>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from specs, validating each one
    ///
    /// # Errors
    ///
    /// See [`FieldMap::push`].
    pub fn from_specs(specs: impl IntoIterator<Item = FieldSpec>) -> Result<Self, FieldMapError> {
        let mut map = Self::new();
        for spec in specs {
            map.push(spec)?;
        }
        Ok(map)
    }

    /// Load a table from a JSON array of specs
    ///
    /// # Errors
    ///
    /// Returns `FieldMapError::Parse` for malformed JSON, otherwise the first
    /// validation error from [`FieldMap::push`].
    pub fn from_json_str(json: &str) -> Result<Self, FieldMapError> {
        let specs: Vec<FieldSpec> = serde_json::from_str(json)?;
        Self::from_specs(specs)
    }

    /// Append a spec
    ///
    /// # Errors
    ///
    /// - `DuplicateOutput` if the output name is already in the table
    /// - `Unresolvable` if the spec has no paths and no default
    /// - `InvalidPath` if any of its paths fails to parse
    pub fn push(&mut self, spec: FieldSpec) -> Result<&mut Self, FieldMapError> {
        if self.outputs.contains(spec.output.as_str()) {
            return Err(FieldMapError::DuplicateOutput(spec.output));
        }
        if spec.paths.is_empty() && spec.default.is_none() {
            return Err(FieldMapError::Unresolvable(spec.output));
        }
        for path in &spec.paths {
            if let Err(source) = PathExpression::parse(path) {
                return Err(FieldMapError::InvalidPath {
                    output: spec.output,
                    source,
                });
            }
        }
        self.outputs.insert(spec.output.clone());
        self.specs.push(spec);
        Ok(self)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolve every output, omitting those with no value
    #[must_use]
    pub fn apply(&self, value: &JsonValue) -> Map<String, JsonValue> {
        self.apply_with(value, None)
    }

    /// Resolve every output with a configured extractor
    #[must_use]
    pub fn apply_with(&self, value: &JsonValue, extractor: Option<&PathExtractor>) -> Map<String, JsonValue> {
        self.specs
            .iter()
            .filter_map(|spec| {
                spec.resolve_with(value, extractor)
                    .map(|resolved| (spec.output.clone(), resolved))
            })
            .collect()
    }

    /// Outputs that resolve to nothing against `value`
    #[must_use]
    pub fn missing(&self, value: &JsonValue) -> Vec<&str> {
        self.specs
            .iter()
            .filter(|spec| spec.resolve(value).is_none())
            .map(|spec| spec.output.as_str())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, output: &str) -> bool {
        self.outputs.contains(output)
    }
}

impl TryFrom<Vec<FieldSpec>> for FieldMap {
    type Error = FieldMapError;

    fn try_from(specs: Vec<FieldSpec>) -> Result<Self, Self::Error> {
        Self::from_specs(specs)
    }
}

impl From<FieldMap> for Vec<FieldSpec> {
    fn from(map: FieldMap) -> Self {
        map.specs
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
