//! Benford conformance analysis
//!
//! Composes extraction, the expected distribution and the goodness-of-fit
//! test into a single call:
//! 1. Input validation (blank text, significance level in [0, 1])
//! 2. Leading-digit extraction and minimum sample check
//! 3. Tally of observed counts
//! 4. Expected counts scaled to the sample size
//! 5. Chi-square test
//! 6. Conformance decision (`p_value > significance_level`)

use crate::chi_square::evaluate;
use crate::digits::{extract_leading_digits, DigitCounts};
use crate::distribution::{expected_distribution, ExpectedDistribution};
use crate::error::{BenfordError, Result};
use tracing::debug;

/// Fewest leading digits accepted for analysis
pub const MIN_SAMPLE_SIZE: usize = 5;

/// Outcome of one analysis call
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    actual_distribution: DigitCounts,
    expected_distribution: ExpectedDistribution,
    chi_square_statistic: f64,
    p_value: f64,
    conforms_to_benford: bool,
}

impl AnalysisResult {
    /// Observed count per leading digit
    pub fn actual_distribution(&self) -> &DigitCounts {
        &self.actual_distribution
    }

    /// Theoretical percentage per leading digit
    pub fn expected_distribution(&self) -> &ExpectedDistribution {
        &self.expected_distribution
    }

    /// Pearson chi-square statistic, rounded to 6 places
    pub fn chi_square_statistic(&self) -> f64 {
        self.chi_square_statistic
    }

    /// Upper-tail p-value, rounded to 6 places
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Whether the p-value exceeds the significance level
    pub fn conforms_to_benford(&self) -> bool {
        self.conforms_to_benford
    }

    /// Number of leading digits analyzed
    pub fn sample_size(&self) -> u64 {
        self.actual_distribution.total()
    }
}

/// Test whether the leading digits of the numbers in `text` follow Benford's Law.
///
/// # Errors
/// - [`BenfordError::InvalidInput`] if `text` is blank
/// - [`BenfordError::InvalidSignificanceLevel`] if `significance_level` is not in [0, 1]
/// - [`BenfordError::InsufficientData`] if fewer than [`MIN_SAMPLE_SIZE`] digits are found
/// - [`BenfordError::ComputationFailure`] if the test itself fails
pub fn analyze(text: &str, significance_level: f64) -> Result<AnalysisResult> {
    // Step 1: Cheap validation
    if text.trim().is_empty() {
        return Err(BenfordError::InvalidInput(
            "Input is empty or missing numbers".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&significance_level) {
        return Err(BenfordError::InvalidSignificanceLevel(significance_level));
    }

    // Step 2: Extraction
    let digits = extract_leading_digits(text);
    debug!("Extracted {} leading digits", digits.len());
    if digits.len() < MIN_SAMPLE_SIZE {
        return Err(BenfordError::InsufficientData {
            found: digits.len(),
            required: MIN_SAMPLE_SIZE,
        });
    }

    // Step 3: Observed counts
    let actual = DigitCounts::from_digits(&digits);

    // Step 4: Expected counts for this sample size
    let expected = expected_distribution()?;
    let expected_counts = expected.expected_counts(actual.total())?;

    // Step 5: Goodness of fit
    let fit = evaluate(&expected_counts, actual.as_array())?;

    // Step 6: Decision
    let conforms = fit.p_value > significance_level;
    debug!(
        statistic = fit.statistic,
        p_value = fit.p_value,
        significance_level,
        conforms,
        "Benford analysis complete"
    );

    Ok(AnalysisResult {
        actual_distribution: actual,
        expected_distribution: expected.clone(),
        chi_square_statistic: fit.statistic,
        p_value: fit.p_value,
        conforms_to_benford: conforms,
    })
}
