//! Extraction limits

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Limits honoured by a configured extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum number of segments in a path
    pub max_depth: usize,
    /// Largest sequence index a path may address
    pub max_index: usize,
    /// Maximum length in bytes of a single key
    pub max_key_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_index: usize::MAX,
            max_key_len: 1024,
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    #[must_use]
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }
}

impl Validator for ExtractorConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_nonzero(self.max_depth, "max_depth")?;
        ConfigValidator::validate_nonzero(self.max_key_len, "max_key_len")?;
        Ok(())
    }
}
