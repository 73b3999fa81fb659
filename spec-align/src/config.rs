//! Alignment configuration.

use crate::constants::DEFAULT_FUZZY_THRESHOLD;
use crate::error::{Error, Result};

/// Tunables of the aligner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignConfig {
    /// Relative edit distance below which a key is accepted as a rename.
    fuzzy_threshold: f64,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl AlignConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a configuration using `threshold` for fuzzy key matching.
    ///
    /// The threshold must lie in `[0, 1)`; `0` disables fuzzy matching.
    pub fn with_fuzzy_threshold(self, threshold: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        Ok(AlignConfig {
            fuzzy_threshold: threshold,
        })
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }
}
