//! Configuration for the longest-run-of-ones test.
//!
//! The block length and the reference category probabilities are a matched
//! pair: the probabilities are the theoretical distribution of the longest
//! '1'-run inside a block of exactly that length. Constructing the pair
//! through [`LongestRunConfig::new`] keeps them consistent and validated.

use thiserror::Error;

/// Block length the reference probabilities below were tabulated for.
pub const DEFAULT_BLOCK_LEN: usize = 8;

/// Probability of the longest '1'-run in a random 8-bit block falling in
/// each category: <=1, 2, 3, >=4. NIST SP 800-22 table values, rounded to
/// four decimals.
pub const BLOCK_LEN_8_PROBS: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// Slack allowed on the probability sum. Covers rounded table entries
/// without letting a genuinely wrong vector through.
const PROB_SUM_TOLERANCE: f64 = 1e-6;

/// Rejected [`LongestRunConfig`] constructions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("block length must be at least 1")]
    ZeroBlockLength,

    #[error("category probability {index} must be non-negative, got {value}")]
    NegativeProbability { index: usize, value: f64 },

    #[error("category probabilities sum to {sum}, expected 1")]
    ProbabilitySum { sum: f64 },
}

/// Validated block length plus reference category probabilities.
///
/// Fields are private: a value of this type always holds a positive block
/// length and four non-negative probabilities summing to 1 (within
/// rounding slack). Zero entries are allowed here; the longest-run test
/// rejects them at evaluation time, where the failing category index can
/// be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct LongestRunConfig {
    block_len: usize,
    category_probs: [f64; 4],
}

impl LongestRunConfig {
    /// Validate and build a configuration.
    pub fn new(block_len: usize, category_probs: [f64; 4]) -> Result<Self, ConfigError> {
        if block_len == 0 {
            return Err(ConfigError::ZeroBlockLength);
        }
        for (index, &value) in category_probs.iter().enumerate() {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::NegativeProbability { index, value });
            }
        }
        let sum: f64 = category_probs.iter().sum();
        if (sum - 1.0).abs() > PROB_SUM_TOLERANCE {
            return Err(ConfigError::ProbabilitySum { sum });
        }
        Ok(Self {
            block_len,
            category_probs,
        })
    }

    /// Bits per block.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Reference probability per longest-run category.
    pub fn category_probs(&self) -> &[f64; 4] {
        &self.category_probs
    }
}

impl Default for LongestRunConfig {
    /// The standard 8-bit-block configuration.
    fn default() -> Self {
        Self {
            block_len: DEFAULT_BLOCK_LEN,
            category_probs: BLOCK_LEN_8_PROBS,
        }
    }
}
