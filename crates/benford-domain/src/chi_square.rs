//! Pearson chi-square goodness-of-fit test
//!
//! The upper-tail probability of the chi-square distribution with `k` degrees
//! of freedom is the regularized upper incomplete gamma function
//! `Q(k/2, x/2)`. It is evaluated with a Lanczos `ln_gamma`, a power series
//! for `x < a + 1` and a Lentz continued fraction otherwise.

use crate::error::{BenfordError, Result};
use crate::rounding::{round_f64, SCALE};
use thiserror::Error;

/// Number of frequency bins (digits 1-9)
pub const BINS: usize = 9;

/// Degrees of freedom of the test over [`BINS`] bins
pub const DEGREES_OF_FREEDOM: f64 = (BINS - 1) as f64;

const MAX_ITERATIONS: usize = 500;
const EPSILON: f64 = 1.0e-15;
const FPMIN: f64 = 1.0e-300;

/// Failure to evaluate the chi-square distribution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Degrees of freedom must be finite and positive
    #[error("invalid degrees of freedom: {0}")]
    InvalidDegreesOfFreedom(f64),

    /// The statistic must be a non-negative number
    #[error("invalid chi-square statistic: {0}")]
    InvalidStatistic(f64),

    /// Series or continued fraction did not converge
    #[error("incomplete gamma evaluation did not converge for a={a}, x={x}")]
    NoConvergence {
        /// Shape parameter
        a: f64,
        /// Evaluation point
        x: f64,
    },
}

/// Chi-square statistic and its p-value, both rounded half-up to 6 places
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodnessOfFit {
    /// Pearson chi-square statistic
    pub statistic: f64,
    /// Probability of a statistic at least this large under the null hypothesis
    pub p_value: f64,
}

/// Compare observed digit counts against expected counts.
///
/// Both slices must hold exactly [`BINS`] entries ordered by digit, and every
/// expected count must be strictly positive.
pub fn evaluate(expected: &[f64], observed: &[u64]) -> Result<GoodnessOfFit> {
    if expected.len() != observed.len() {
        return Err(BenfordError::InvalidInput(format!(
            "Expected and observed arrays must be of the same length ({} vs {})",
            expected.len(),
            observed.len()
        )));
    }
    if expected.len() != BINS {
        return Err(BenfordError::InvalidInput(format!(
            "Expected {} frequency bins, got {}",
            BINS,
            expected.len()
        )));
    }
    // `!(e > 0.0)` also rejects NaN
    if expected.iter().any(|&e| !(e > 0.0)) {
        return Err(BenfordError::InvalidInput(
            "Expected frequencies must all be greater than zero".to_string(),
        ));
    }

    let statistic = pearson_statistic(expected, observed);
    let p_value = chi_squared_survival(statistic, DEGREES_OF_FREEDOM)
        .map_err(|e| BenfordError::computation("Chi-square test failed", e))?;

    let statistic = round_f64(statistic, SCALE)
        .map_err(|e| BenfordError::computation("Rounding chi-square statistic failed", e))?;
    let p_value = round_f64(p_value, SCALE)
        .map_err(|e| BenfordError::computation("Rounding p-value failed", e))?;

    Ok(GoodnessOfFit { statistic, p_value })
}

fn pearson_statistic(expected: &[f64], observed: &[u64]) -> f64 {
    expected
        .iter()
        .zip(observed)
        .map(|(&e, &o)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

/// Upper-tail probability `P(X >= statistic)` for a chi-square distribution
/// with `degrees_of_freedom` degrees of freedom.
pub fn chi_squared_survival(
    statistic: f64,
    degrees_of_freedom: f64,
) -> std::result::Result<f64, DistributionError> {
    if !degrees_of_freedom.is_finite() || degrees_of_freedom <= 0.0 {
        return Err(DistributionError::InvalidDegreesOfFreedom(degrees_of_freedom));
    }
    if statistic.is_nan() || statistic < 0.0 {
        return Err(DistributionError::InvalidStatistic(statistic));
    }
    if statistic == f64::INFINITY {
        return Ok(0.0);
    }
    let q = regularized_gamma_q(degrees_of_freedom / 2.0, statistic / 2.0)?;
    Ok(q.clamp(0.0, 1.0))
}

/// Regularized upper incomplete gamma Q(a, x) = 1 - P(a, x)
fn regularized_gamma_q(a: f64, x: f64) -> std::result::Result<f64, DistributionError> {
    if x == 0.0 {
        return Ok(1.0);
    }
    if x < a + 1.0 {
        Ok(1.0 - gamma_series(a, x)?)
    } else {
        gamma_continued_fraction(a, x)
    }
}

/// P(a, x) by its power series
fn gamma_series(a: f64, x: f64) -> std::result::Result<f64, DistributionError> {
    let mut ap = a;
    let mut term = 1.0 / a;
    let mut sum = term;

    for _ in 0..MAX_ITERATIONS {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * EPSILON {
            return Ok(sum * (-x + a * x.ln() - ln_gamma(a)).exp());
        }
    }

    Err(DistributionError::NoConvergence { a, x })
}

/// Q(a, x) by the modified Lentz continued fraction
fn gamma_continued_fraction(a: f64, x: f64) -> std::result::Result<f64, DistributionError> {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=MAX_ITERATIONS {
        let i_f = i as f64;
        let an = -i_f * (i_f - a);
        b += 2.0;

        d = an * d + b;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = b + an / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPSILON {
            return Ok((-x + a * x.ln() - ln_gamma(a)).exp() * h);
        }
    }

    Err(DistributionError::NoConvergence { a, x })
}

/// Lanczos approximation of ln(Gamma(x)) for x > 0.
#[allow(clippy::excessive_precision)]
fn ln_gamma(x: f64) -> f64 {
    // Lanczos coefficients (g=7)
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    if x < 0.5 {
        // Reflection formula
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let t = x + 7.5; // g + 0.5
    let mut acc = COEFFICIENTS[0];
    for (i, &coef) in COEFFICIENTS.iter().enumerate().skip(1) {
        acc += coef / (x + i as f64);
    }

    0.5 * (2.0 * std::f64::consts::PI).ln() + (t.ln() * (x + 0.5)) - t + acc.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Closed form for even degrees of freedom: e^(-x/2) * sum_{k<df/2} (x/2)^k / k!
    fn survival_even_df(statistic: f64, df: u32) -> f64 {
        let y = statistic / 2.0;
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..(df / 2) {
            term *= y / k as f64;
            sum += term;
        }
        (-y).exp() * sum
    }

    #[test]
    fn test_reference_scenario() {
        let expected = [301.0, 176.0, 125.0, 97.0, 79.0, 67.0, 58.0, 51.0, 46.0];
        let observed = [298, 180, 120, 95, 80, 65, 60, 52, 50];

        let fit = evaluate(&expected, &observed).unwrap();

        assert!((fit.statistic - 0.87).abs() < 0.01, "statistic {}", fit.statistic);
        assert!((fit.p_value - 0.99).abs() < 0.01, "p-value {}", fit.p_value);
        assert!((fit.statistic - 0.870806).abs() < 1e-9);
        assert!((fit.p_value - 0.99894).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_fit() {
        let expected = [10.0; 9];
        let observed = [10; 9];

        let fit = evaluate(&expected, &observed).unwrap();
        assert_eq!(fit.statistic, 0.0);
        assert_eq!(fit.p_value, 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = evaluate(&[1.0; 9], &[1; 8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn test_wrong_bin_count() {
        let err = evaluate(&[1.0; 3], &[1; 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("9 frequency bins"));
    }

    #[test]
    fn test_zero_expected_frequency() {
        let mut expected = [10.0; 9];
        expected[4] = 0.0;
        let err = evaluate(&expected, &[10; 9]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_nan_expected_frequency() {
        let mut expected = [10.0; 9];
        expected[0] = f64::NAN;
        let err = evaluate(&expected, &[10; 9]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_degenerate_expected_is_computation_failure() {
        // inf/inf makes the statistic NaN
        let mut expected = [10.0; 9];
        expected[0] = f64::INFINITY;
        let err = evaluate(&expected, &[10; 9]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ComputationFailure);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_huge_statistic_is_not_an_error() {
        let mut expected = [10.0; 9];
        expected[0] = 1e-300;
        let fit = evaluate(&expected, &[5; 9]).unwrap();

        assert!(fit.statistic > 1e300);
        assert!(fit.statistic.is_finite());
        assert_eq!(fit.p_value, 0.0);
    }

    #[test]
    fn test_survival_matches_closed_form() {
        for &x in &[0.1, 0.87, 2.73, 5.689854, 8.0, 15.5, 26.1, 53.4, 120.0] {
            let got = chi_squared_survival(x, 8.0).unwrap();
            let want = survival_even_df(x, 8);
            assert!((got - want).abs() < 1e-12, "x={x}: {got} vs {want}");
        }
    }

    #[test]
    fn test_survival_critical_values() {
        // 95th percentile of chi-square with 8 degrees of freedom
        let p = chi_squared_survival(15.507313, 8.0).unwrap();
        assert!((p - 0.05).abs() < 1e-6);
        // 1 degree of freedom uses the odd-shape branch of ln_gamma
        let p = chi_squared_survival(3.841459, 1.0).unwrap();
        assert!((p - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_survival_limits() {
        assert_eq!(chi_squared_survival(0.0, 8.0).unwrap(), 1.0);
        assert_eq!(chi_squared_survival(f64::INFINITY, 8.0).unwrap(), 0.0);
        assert!(chi_squared_survival(1.0e4, 8.0).unwrap() < 1e-300);
    }

    #[test]
    fn test_survival_rejects_invalid_parameters() {
        assert_eq!(
            chi_squared_survival(1.0, 0.0),
            Err(DistributionError::InvalidDegreesOfFreedom(0.0))
        );
        assert!(matches!(
            chi_squared_survival(f64::NAN, 8.0),
            Err(DistributionError::InvalidStatistic(_))
        ));
        assert!(matches!(
            chi_squared_survival(-1.0, 8.0),
            Err(DistributionError::InvalidStatistic(_))
        ));
    }

    #[test]
    fn test_ln_gamma_integers() {
        // Gamma(5) = 4! = 24
        assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
        // Gamma(0.5) = sqrt(pi)
        assert!((ln_gamma(0.5) - std::f64::consts::PI.sqrt().ln()).abs() < 1e-12);
    }
}
