//! The three-test randomness battery.
//!
//! Each test takes a '0'/'1' string, derives one statistic, and refers it to
//! its limiting distribution, yielding a p-value in [0, 1]. High p-values are
//! consistent with randomness; values below the caller's significance level
//! are evidence against it. All functions are pure: same input, same output,
//! no shared state.

use serde::Serialize;
use statrs::function::erf::erfc;
use statrs::function::gamma::gamma_lr;

use crate::config::LongestRunConfig;
use crate::error::TestError;

// ═══════════════════════════════════════════════════════════════════════════
// Battery report
// ═══════════════════════════════════════════════════════════════════════════

/// P-values from one battery run over a single sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    /// Sequence length in bits.
    pub bits: usize,
    /// Frequency (monobit) test p-value.
    pub frequency_p: f64,
    /// Runs test p-value.
    pub runs_p: f64,
    /// Longest-run-of-ones test p-value.
    pub longest_run_p: f64,
}

impl SequenceReport {
    /// True when every p-value clears the significance level.
    pub fn passes(&self, alpha: f64) -> bool {
        self.frequency_p >= alpha && self.runs_p >= alpha && self.longest_run_p >= alpha
    }

    /// Smallest of the three p-values.
    pub fn min_p(&self) -> f64 {
        self.frequency_p.min(self.runs_p).min(self.longest_run_p)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Input scanning
// ═══════════════════════════════════════════════════════════════════════════

/// Count zeros and ones, rejecting the first symbol that is neither.
fn count_bits(test: &'static str, sequence: &str) -> Result<(usize, usize), TestError> {
    let mut zeros = 0usize;
    let mut ones = 0usize;
    for (position, symbol) in sequence.char_indices() {
        match symbol {
            '0' => zeros += 1,
            '1' => ones += 1,
            _ => return Err(TestError::InvalidSymbol {
                test,
                symbol,
                position,
            }),
        }
    }
    Ok((zeros, ones))
}

/// Final gate on every p-value. The containment check is false for NaN, so a
/// poisoned statistic surfaces here instead of propagating silently.
fn check_range(test: &'static str, value: f64) -> Result<f64, TestError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TestError::PValueOutOfRange { test, value });
    }
    Ok(value)
}

// ═══════════════════════════════════════════════════════════════════════════
// 1. FREQUENCY (MONOBIT) TEST
// ═══════════════════════════════════════════════════════════════════════════

/// Frequency (monobit) test: is the whole sequence balanced between ones
/// and zeros?
///
/// The signed excess S = ones - zeros is normalized to S_obs = |S| / sqrt(N)
/// and referred to the half-normal distribution:
///
/// ```text
/// P = erfc(S_obs / sqrt(2))
/// ```
///
/// Defined for any non-empty sequence.
pub fn frequency_bitwise_test(sequence: &str) -> Result<f64, TestError> {
    let name = "frequency_bitwise_test";
    let (zeros, ones) = count_bits(name, sequence)?;
    let n = zeros + ones;
    if n == 0 {
        return Err(TestError::SequenceTooShort {
            test: name,
            length: 0,
            min: 1,
        });
    }

    let s = ones as i64 - zeros as i64;
    let s_obs = (s as f64).abs() / (n as f64).sqrt();
    check_range(name, erfc(s_obs / 2.0_f64.sqrt()))
}

// ═══════════════════════════════════════════════════════════════════════════
// 2. RUNS TEST
// ═══════════════════════════════════════════════════════════════════════════

/// Runs test: does the number of uninterrupted same-symbol runs match what a
/// random sequence would show?
///
/// The run count equals the number of adjacent unequal pairs plus one; this
/// implementation counts the transitions V_n and compares them against the
/// expectation 2·N·pi·(1 - pi), where pi is the ones-proportion:
///
/// ```text
/// P = erfc(|V_n - 2·N·pi·(1 - pi)| / (2·sqrt(2N)·pi·(1 - pi)))
/// ```
///
/// The test only applies when the sequence is roughly balanced. Inputs with
/// |pi - 0.5| >= 2 / sqrt(N) return a p-value of 0 without evaluating the
/// statistic: the frequency deviation alone already rules out randomness,
/// which is a verdict, not an error.
pub fn similar_sequences_test(sequence: &str) -> Result<f64, TestError> {
    let name = "similar_sequences_test";
    let (zeros, ones) = count_bits(name, sequence)?;
    let n = zeros + ones;
    if n < 2 {
        return Err(TestError::SequenceTooShort {
            test: name,
            length: n,
            min: 2,
        });
    }

    let proportion = ones as f64 / n as f64;
    if (proportion - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return Ok(0.0);
    }

    let variance = proportion * (1.0 - proportion);
    if variance == 0.0 {
        // Single-symbol input shorter than 16 bits: |pi - 0.5| = 0.5 still
        // clears the prerequisite above, but the statistic's spread is 0.
        return Err(TestError::ZeroVariance {
            test: name,
            proportion,
        });
    }

    let transitions = sequence
        .as_bytes()
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .count();
    let expected = 2.0 * n as f64 * variance;
    let spread = 2.0 * (2.0 * n as f64).sqrt() * variance;
    check_range(name, erfc((transitions as f64 - expected).abs() / spread))
}

// ═══════════════════════════════════════════════════════════════════════════
// 3. LONGEST RUN OF ONES IN A BLOCK
// ═══════════════════════════════════════════════════════════════════════════

/// Longest-run-of-ones test: within fixed-size blocks, do the longest
/// '1'-runs follow their theoretical distribution?
///
/// The sequence is split into blocks of `config.block_len()` bits; a trailing
/// partial block is discarded. Each block's longest '1'-run is bucketed into
/// the categories <=1, 2, 3, >=4, and the bucket counts V are referred to the
/// reference probabilities by a chi-square statistic over `n` blocks:
///
/// ```text
/// Xi² = sum_i (V[i] - n·p_i)² / (n·p_i)
/// P   = gamma_lr(1.5, Xi² / 2)
/// ```
///
/// where `gamma_lr` is the regularized lower incomplete gamma function.
pub fn longest_ones_sequence_test(
    sequence: &str,
    config: &LongestRunConfig,
) -> Result<f64, TestError> {
    let name = "longest_ones_sequence_test";
    let (zeros, ones) = count_bits(name, sequence)?;
    let n = zeros + ones;
    let block_len = config.block_len();
    let blocks = n / block_len;
    if blocks == 0 {
        return Err(TestError::SequenceTooShort {
            test: name,
            length: n,
            min: block_len,
        });
    }

    let mut observed = [0u64; 4];
    for block in sequence.as_bytes().chunks_exact(block_len) {
        let mut longest = 0u32;
        let mut current = 0u32;
        for &symbol in block {
            if symbol == b'1' {
                current += 1;
                if current > longest {
                    longest = current;
                }
            } else {
                current = 0;
            }
        }
        match longest {
            0 | 1 => observed[0] += 1,
            2 => observed[1] += 1,
            3 => observed[2] += 1,
            _ => observed[3] += 1,
        }
    }

    let mut chi_squared = 0.0;
    for (index, &prob) in config.category_probs().iter().enumerate() {
        if prob == 0.0 {
            return Err(TestError::ZeroProbability { test: name, index });
        }
        let expected = blocks as f64 * prob;
        let diff = observed[index] as f64 - expected;
        chi_squared += diff * diff / expected;
    }

    // Endpoints are exact: P(1.5, 0) = 0 and P(1.5, inf) = 1.
    let p = if chi_squared == 0.0 {
        0.0
    } else if chi_squared.is_finite() {
        gamma_lr(1.5, chi_squared / 2.0)
    } else {
        1.0
    };
    check_range(name, p)
}

// ═══════════════════════════════════════════════════════════════════════════
// Battery
// ═══════════════════════════════════════════════════════════════════════════

/// Run all three tests over one sequence, stopping at the first error.
pub fn run_battery(
    sequence: &str,
    config: &LongestRunConfig,
) -> Result<SequenceReport, TestError> {
    let frequency_p = frequency_bitwise_test(sequence)?;
    let runs_p = similar_sequences_test(sequence)?;
    let longest_run_p = longest_ones_sequence_test(sequence, config)?;
    Ok(SequenceReport {
        bits: sequence.len(),
        frequency_p,
        runs_p,
        longest_run_p,
    })
}
