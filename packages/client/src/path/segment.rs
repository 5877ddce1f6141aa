//! Parsed path segments and expressions

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// One traversal step of a path expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping lookup (`name`)
    Key(String),
    /// Mapping lookup then sequence index (`name[0]`)
    KeyIndex(String, usize),
    /// Sequence index applied to the root (`[0]`)
    RootIndex(usize),
}

impl PathSegment {
    /// Key looked up by this segment, if any
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) | Self::KeyIndex(key, _) => Some(key),
            Self::RootIndex(_) => None,
        }
    }

    /// Index applied by this segment, if any
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::KeyIndex(_, index) | Self::RootIndex(index) => Some(*index),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::KeyIndex(key, index) => write!(f, "{key}[{index}]"),
            Self::RootIndex(index) => write!(f, "[{index}]"),
        }
    }
}

/// A parsed, immutable path expression
///
/// Parse once with [`PathExpression::parse`] and reuse it across documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpression {
    pub(crate) segments: Vec<PathSegment>,
    pub(crate) source: String,
}

impl PathExpression {
    /// Source text this expression was parsed from
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Length in bytes of the longest key in the expression
    #[must_use]
    pub fn longest_key(&self) -> usize {
        self.segments
            .iter()
            .filter_map(PathSegment::key)
            .map(str::len)
            .max()
            .unwrap_or(0)
    }

    /// Largest index in the expression
    #[must_use]
    pub fn largest_index(&self) -> Option<usize> {
        self.segments.iter().filter_map(PathSegment::index).max()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for PathExpression {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PathExpression {
    fn as_ref(&self) -> &str {
        &self.source
    }
}
