//! Path and extraction error types

use serde_json::Error as SerdeError;

/// Result type for path parsing
pub type PathResult<T> = Result<T, PathError>;

/// Result type for typed extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Path expression syntax and limit errors
///
/// Every positional variant carries the full source path and the byte offset
/// at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path expression is empty")]
    EmptyPath,

    #[error("empty segment at position {position} in `{path}`")]
    EmptySegment { path: String, position: usize },

    #[error("unterminated bracket at position {position} in `{path}`")]
    UnterminatedBracket { path: String, position: usize },

    #[error("unexpected character '{found}' at position {position} in `{path}`")]
    UnexpectedCharacter {
        path: String,
        position: usize,
        found: char,
    },

    #[error("invalid index `{text}` at position {position} in `{path}`")]
    InvalidIndex {
        path: String,
        position: usize,
        text: String,
    },

    #[error("bare index at position {position} in `{path}` is only valid as the first segment")]
    RootIndexNotFirst { path: String, position: usize },

    #[error("chained index at position {position} in `{path}` is not supported")]
    ChainedIndex { path: String, position: usize },

    #[error("path `{path}` exceeds {limit}: {actual} > {max}")]
    LimitExceeded {
        path: String,
        limit: &'static str,
        actual: usize,
        max: usize,
    },
}

impl PathError {
    /// Byte offset of the problem, when the error is positional
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptySegment { position, .. }
            | Self::UnterminatedBracket { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::InvalidIndex { position, .. }
            | Self::RootIndexNotFirst { position, .. }
            | Self::ChainedIndex { position, .. } => Some(*position),
            Self::EmptyPath | Self::LimitExceeded { .. } => None,
        }
    }

    /// Whether this error comes from a configured limit rather than the syntax
    #[must_use]
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. })
    }
}

/// Typed extraction errors
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("extracted value does not match the requested type: {0}")]
    Deserialize(#[from] SerdeError),
}
