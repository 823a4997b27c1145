//! Benford Domain Layer
//!
//! This crate contains the analysis core: it decides whether the leading
//! digits of the numbers found in a block of free-form text follow Benford's
//! Law. Every operation is a pure function over its inputs; nothing outlives
//! a single call except the immutable, lazily computed theoretical
//! distribution.
//!
//! ## Pipeline
//!
//! ```text
//! text → extract_leading_digits → DigitCounts ─┐
//!                                               ├→ evaluate → AnalysisResult
//! expected_distribution → expected counts ──────┘
//! ```
//!
//! - **Digit extraction** ([`digits`]): boundary-delimited decimal tokens reduced
//!   to their first non-zero digit
//! - **Expected distribution** ([`distribution`]): `log10(1 + 1/d) * 100` at
//!   six decimal places
//! - **Goodness of fit** ([`chi_square`]): Pearson statistic and upper-tail
//!   p-value with 8 degrees of freedom
//! - **Orchestration** ([`analysis`]): validation, tally, scaling and the
//!   conformance decision
//!
//! ## Example
//!
//! ```
//! use benford_domain::analyze;
//!
//! let text = "Invoices: 1200, 1450, 180.25, 2300, 310, 1.75, 12, 19";
//! let result = analyze(text, 0.05).unwrap();
//!
//! assert_eq!(result.actual_distribution().total(), 8);
//! assert_eq!(result.conforms_to_benford(), result.p_value() > 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod chi_square;
pub mod digits;
pub mod distribution;
pub mod error;
mod rounding;

// Re-exports for convenience
pub use analysis::{analyze, AnalysisResult, MIN_SAMPLE_SIZE};
pub use chi_square::{evaluate, GoodnessOfFit};
pub use digits::{extract_leading_digits, DigitCounts, LeadingDigit};
pub use distribution::{calculate_expected_distribution, expected_distribution, ExpectedDistribution};
pub use error::{BenfordError, ErrorKind, Result};
