//! Theoretical Benford distribution
//!
//! For digit `d` the expected share of leading digits is
//! `log10(1 + 1/d) * 100` percent. Percentages are held as exact decimals
//! rounded half-up to six places, so the published values (30.103000,
//! 17.609126, ..., 4.575749) are reproduced exactly.

use crate::digits::LeadingDigit;
use crate::error::{BenfordError, NumericError, Result};
use crate::rounding::{exact_decimal, round_half_up, SCALE};
use once_cell::sync::OnceCell;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

static EXPECTED: OnceCell<ExpectedDistribution> = OnceCell::new();

/// Expected percentage of numbers led by each digit 1-9
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDistribution {
    percentages: [Decimal; 9],
}

impl ExpectedDistribution {
    /// Percentage expected for `digit`
    pub fn percentage(&self, digit: LeadingDigit) -> Decimal {
        self.percentages[digit.index()]
    }

    /// `(digit, percentage)` pairs ordered by digit
    pub fn iter(&self) -> impl Iterator<Item = (u8, Decimal)> + '_ {
        self.percentages
            .iter()
            .enumerate()
            .map(|(idx, &pct)| (idx as u8 + 1, pct))
    }

    /// Sum of all nine percentages (100 within rounding)
    pub fn sum(&self) -> Decimal {
        self.percentages.iter().copied().sum()
    }

    /// Expected occurrence counts for a sample of `total` leading digits.
    ///
    /// Each count is `percentage * total / 100`, computed exactly and only
    /// converted to a float at the end.
    pub fn expected_counts(&self, total: u64) -> Result<[f64; 9]> {
        let total = Decimal::from(total);
        let mut counts = [0.0; 9];
        for (slot, pct) in counts.iter_mut().zip(self.percentages.iter()) {
            let exact = pct
                .checked_mul(total)
                .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(|| {
                    BenfordError::computation(
                        "Expected count overflowed decimal range",
                        rust_decimal::Error::ExceedsMaximumPossibleValue,
                    )
                })?;
            *slot = exact.to_f64().ok_or_else(|| {
                BenfordError::computation(
                    "Expected count is not representable",
                    NumericError::NotRepresentable(exact),
                )
            })?;
        }
        Ok(counts)
    }
}

/// Compute the theoretical distribution from scratch.
///
/// Pure and deterministic; [`expected_distribution`] caches the same value.
pub fn calculate_expected_distribution() -> Result<ExpectedDistribution> {
    let mut percentages = [Decimal::ZERO; 9];
    for (idx, slot) in percentages.iter_mut().enumerate() {
        let digit = (idx + 1) as f64;
        let raw = (1.0 + 1.0 / digit).log10() * 100.0;
        let exact = exact_decimal(raw).map_err(|e| {
            BenfordError::computation(format!("Benford percentage for digit {} failed", idx + 1), e)
        })?;
        *slot = round_half_up(exact, SCALE);
    }
    Ok(ExpectedDistribution { percentages })
}

/// Process-wide theoretical distribution, computed on first use.
pub fn expected_distribution() -> Result<&'static ExpectedDistribution> {
    EXPECTED.get_or_try_init(calculate_expected_distribution)
}
