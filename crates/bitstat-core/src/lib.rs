//! # bitstat-core
//!
//! **Statistical randomness tests for '0'/'1' bit sequences.**
//!
//! Three classic tests in the NIST SP 800-22 family, each reducing a bit
//! sequence to a p-value: the frequency (monobit) test, the runs test, and
//! the longest-run-of-ones-in-a-block test. A p-value below the significance
//! level (commonly 0.01) is evidence the source is not random.
//!
//! Tests are pure functions over `&str` input. Anything that prevents a
//! verdict, such as a sequence that is too short or contains a symbol other
//! than '0' and '1', comes back as a [`TestError`] instead of a number.
//!
//! ## Quick Start
//!
//! ```
//! use bitstat_core::{run_battery, LongestRunConfig};
//!
//! let config = LongestRunConfig::default();
//! let report = run_battery("1100100100001111110110101010001000100001", &config)?;
//!
//! assert!(report.passes(0.01));
//! println!("frequency: {:.6}", report.frequency_p);
//! println!("runs:      {:.6}", report.runs_p);
//! println!("longest:   {:.6}", report.longest_run_p);
//! # Ok::<(), bitstat_core::TestError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`battery`]: the three tests plus [`run_battery`] and [`SequenceReport`]
//! - [`config`]: validated block-length / category-probability pairing for
//!   the longest-run test
//! - [`error`]: the [`TestError`] taxonomy

pub mod battery;
pub mod config;
pub mod error;

// Tests and battery
pub use battery::{
    SequenceReport, frequency_bitwise_test, longest_ones_sequence_test, run_battery,
    similar_sequences_test,
};

// Configuration
pub use config::{BLOCK_LEN_8_PROBS, ConfigError, DEFAULT_BLOCK_LEN, LongestRunConfig};

// Errors
pub use error::TestError;

/// Crate version, for embedding in reports and CLI output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
