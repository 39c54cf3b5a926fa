//! Battery error type.

use thiserror::Error;

/// Ways a test invocation can fail.
///
/// Every variant carries the name of the test that raised it, so the
/// message alone is enough to locate the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    /// Input has fewer bits than the statistic is defined for.
    #[error("{test}: sequence has {length} bits, need at least {min}")]
    SequenceTooShort {
        test: &'static str,
        length: usize,
        min: usize,
    },

    /// Something other than '0' or '1' appeared in the input.
    #[error("{test}: symbol {symbol:?} at position {position} is not '0' or '1'")]
    InvalidSymbol {
        test: &'static str,
        symbol: char,
        position: usize,
    },

    /// The runs statistic degenerates when the ones-proportion is 0 or 1.
    /// Only short single-symbol inputs reach this; longer ones are already
    /// rejected by the proportion prerequisite.
    #[error("{test}: ones-proportion {proportion} leaves the runs statistic with zero variance")]
    ZeroVariance { test: &'static str, proportion: f64 },

    /// A reference category probability of zero has no defined expected
    /// block count.
    #[error("{test}: reference probability for category {index} is zero")]
    ZeroProbability { test: &'static str, index: usize },

    /// A computed p-value landed outside [0, 1]. Points at a defect in the
    /// statistic or special-function evaluation rather than at bad input.
    #[error("{test}: p-value {value} is outside [0, 1]")]
    PValueOutOfRange { test: &'static str, value: f64 },
}
