//! Configured extractor with statistics

use serde_json::Value as JsonValue;

use super::resolve::extract_parsed;
use crate::config::{ConfigResult, ExtractorConfig, Validator};
use crate::error::{PathError, PathResult};
use crate::null_semantics::Extracted;
use crate::path::PathExpression;
use crate::telemetry::ExtractionStats;

/// Extractor that enforces [`ExtractorConfig`] limits and records statistics
///
/// Shareable across threads; statistics use relaxed atomics.
#[derive(Debug, Default)]
pub struct PathExtractor {
    config: ExtractorConfig,
    stats: ExtractionStats,
}

impl PathExtractor {
    /// Extractor with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if `config` fails
    /// validation.
    pub fn with_config(config: ExtractorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: ExtractionStats::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Parse `path` and check it against the configured limits
    ///
    /// # Errors
    ///
    /// Returns the parse error, or `PathError::LimitExceeded` when the parsed
    /// path is deeper, addresses a larger index, or carries a longer key than
    /// allowed.
    pub fn parse(&self, path: &str) -> PathResult<PathExpression> {
        let expression = PathExpression::parse(path)?;
        self.check_limits(&expression)?;
        Ok(expression)
    }

    /// Check a parsed path against the configured limits
    ///
    /// # Errors
    ///
    /// Returns `PathError::LimitExceeded` naming the first limit exceeded.
    pub fn check_limits(&self, expression: &PathExpression) -> PathResult<()> {
        let exceeded = |limit, actual, max| PathError::LimitExceeded {
            path: expression.as_str().to_string(),
            limit,
            actual,
            max,
        };

        if expression.depth() > self.config.max_depth {
            return Err(exceeded("max_depth", expression.depth(), self.config.max_depth));
        }
        let key_len = expression.longest_key();
        if key_len > self.config.max_key_len {
            return Err(exceeded("max_key_len", key_len, self.config.max_key_len));
        }
        if let Some(index) = expression.largest_index() {
            if index > self.config.max_index {
                return Err(exceeded("max_index", index, self.config.max_index));
            }
        }
        Ok(())
    }

    /// Extract the value at `path`, honouring the configured limits
    ///
    /// Same result semantics as [`extract`](super::extract); a path that
    /// exceeds a limit is absent.
    #[must_use]
    pub fn extract<'a>(&self, value: &'a JsonValue, path: &str) -> Extracted<'a> {
        match PathExpression::parse(path) {
            Ok(expression) => self.extract_parsed(value, &expression),
            Err(err) => {
                log::debug!("Path failed to parse, treating as absent: {err}");
                self.stats.record_parse_failure();
                Extracted::Absent
            }
        }
    }

    /// Extract the value at an already-parsed path, honouring the configured limits
    #[must_use]
    pub fn extract_parsed<'a>(&self, value: &'a JsonValue, expression: &PathExpression) -> Extracted<'a> {
        if let Err(err) = self.check_limits(expression) {
            log::warn!("{err}");
            self.stats.record_limit_rejection();
            return Extracted::Absent;
        }

        let extracted = extract_parsed(value, expression);
        if extracted.is_present() {
            self.stats.record_hit();
        } else {
            self.stats.record_absence();
        }
        extracted
    }
}
