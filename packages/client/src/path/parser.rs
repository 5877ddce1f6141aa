//! Path expression parsing
//!
//! Splits the source on `.` and classifies each piece as a key, a key with a
//! trailing `[index]`, or a bare root `[index]`. Positions in errors are byte
//! offsets into the full source string.

use super::segment::{PathExpression, PathSegment};
use crate::error::{PathError, PathResult};

impl PathExpression {
    /// Parse a dotted/bracketed path expression
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] describing the first syntax problem found:
    /// - `EmptyPath` for an empty string
    /// - `EmptySegment` for `a..b`, a leading or a trailing dot
    /// - `UnterminatedBracket` for `items[0`
    /// - `InvalidIndex` for `items[x]`, `items[-1]` or an index that overflows
    /// - `ChainedIndex` for `grid[0][1]`
    /// - `RootIndexNotFirst` for `a.[0]`
    /// - `UnexpectedCharacter` for a stray `]` or text after the closing bracket
    pub fn parse(path: &str) -> PathResult<Self> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mut segments = Vec::new();
        let mut offset = 0;

        for (ordinal, raw) in path.split('.').enumerate() {
            segments.push(parse_segment(path, raw, offset, ordinal == 0)?);
            offset += raw.len() + 1;
        }

        Ok(Self {
            segments,
            source: path.to_string(),
        })
    }
}

fn parse_segment(path: &str, raw: &str, offset: usize, first: bool) -> PathResult<PathSegment> {
    if raw.is_empty() {
        return Err(PathError::EmptySegment {
            path: path.to_string(),
            position: offset,
        });
    }

    let Some(open) = raw.find('[') else {
        if let Some(stray) = raw.find(']') {
            return Err(PathError::UnexpectedCharacter {
                path: path.to_string(),
                position: offset + stray,
                found: ']',
            });
        }
        return Ok(PathSegment::Key(raw.to_string()));
    };

    let name = &raw[..open];
    if let Some(stray) = name.find(']') {
        return Err(PathError::UnexpectedCharacter {
            path: path.to_string(),
            position: offset + stray,
            found: ']',
        });
    }

    let inner_start = open + 1;
    let rest = &raw[inner_start..];
    let Some(close) = rest.find(']') else {
        return Err(PathError::UnterminatedBracket {
            path: path.to_string(),
            position: offset + open,
        });
    };

    let after_start = inner_start + close + 1;
    let after = &raw[after_start..];
    if let Some(found) = after.chars().next() {
        return Err(if found == '[' {
            PathError::ChainedIndex {
                path: path.to_string(),
                position: offset + after_start,
            }
        } else {
            PathError::UnexpectedCharacter {
                path: path.to_string(),
                position: offset + after_start,
                found,
            }
        });
    }

    let index = parse_index(path, &rest[..close], offset + inner_start)?;

    if name.is_empty() {
        if !first {
            return Err(PathError::RootIndexNotFirst {
                path: path.to_string(),
                position: offset,
            });
        }
        Ok(PathSegment::RootIndex(index))
    } else {
        Ok(PathSegment::KeyIndex(name.to_string(), index))
    }
}

/// Decimal, non-negative, no sign
fn parse_index(path: &str, text: &str, position: usize) -> PathResult<usize> {
    let invalid = || PathError::InvalidIndex {
        path: path.to_string(),
        position,
        text: text.to_string(),
    };

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse::<usize>().map_err(|_| invalid())
}
