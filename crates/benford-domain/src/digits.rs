//! Leading-digit extraction and tallying

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Unsigned decimal token delimited by word boundaries.
///
/// Signs are never part of the match, and digit runs glued to letters
/// (`abc123`, `1e5`) do not match at all.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]+(?:\.[0-9]+)?\b").expect("number pattern is a valid regex")
});

/// First significant digit of a number, always in 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadingDigit(u8);

impl LeadingDigit {
    /// Create a leading digit, or `None` if `value` is outside 1..=9
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    /// Numeric value of the digit
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based bin index (digit 1 → 0)
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for LeadingDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the leading significant digit of every numeric token in `text`.
///
/// Digits are returned in the order their tokens appear. Tokens made only of
/// zeros (`0`, `0.000`) have no significant digit and are skipped.
pub fn extract_leading_digits(text: &str) -> Vec<LeadingDigit> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|token| leading_digit(token.as_str()))
        .collect()
}

fn leading_digit(token: &str) -> Option<LeadingDigit> {
    token
        .trim_start_matches('0')
        .bytes()
        .find(|b| (b'1'..=b'9').contains(b))
        .and_then(|b| LeadingDigit::new(b - b'0'))
}

/// Occurrence count for each leading digit 1-9.
///
/// All nine digits are always present, with zero for digits never seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCounts {
    counts: [u64; 9],
}

impl DigitCounts {
    /// Tally a sequence of leading digits
    pub fn from_digits<'a, I>(digits: I) -> Self
    where
        I: IntoIterator<Item = &'a LeadingDigit>,
    {
        let mut tally = Self::default();
        for digit in digits {
            tally.record(*digit);
        }
        tally
    }

    /// Count one occurrence of `digit`
    pub fn record(&mut self, digit: LeadingDigit) {
        self.counts[digit.index()] += 1;
    }

    /// Occurrences of `digit`
    pub fn get(&self, digit: LeadingDigit) -> u64 {
        self.counts[digit.index()]
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts ordered by digit 1→9
    pub fn as_array(&self) -> &[u64; 9] {
        &self.counts
    }

    /// `(digit, count)` pairs ordered by digit
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, &count)| (idx as u8 + 1, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<u8> {
        extract_leading_digits(text).into_iter().map(LeadingDigit::get).collect()
    }

    #[test]
    fn test_strips_leading_zeros() {
        assert_eq!(values("100, 200.25, 030, 0.47, 0031.3"), vec![1, 2, 3, 4, 3]);
    }

    #[test]
    fn test_signs_and_scales_do_not_matter() {
        assert_eq!(
            values("Invoice +4.56, 00456, Fees, 0.456, 0.00456, -4.56"),
            vec![4, 4, 4, 4, 4]
        );
    }

    #[test]
    fn test_all_zero_tokens_are_skipped() {
        assert_eq!(values("0, 0.000, 000, 7"), vec![7]);
        assert!(values("0 00 0.0").is_empty());
    }

    #[test]
    fn test_embedded_digit_runs_are_ignored() {
        assert_eq!(values("abc123 x1 9x 1e5 0x1F 7"), vec![7]);
    }

    #[test]
    fn test_separators_split_tokens() {
        // thousands separators and repeated dots start new tokens
        assert_eq!(values("1,253 and 4.5.6"), vec![1, 2, 4, 6]);
    }

    #[test]
    fn test_superscript_is_not_a_digit() {
        assert_eq!(values("1.73m² and ²3"), vec![1, 3]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(values("no numbers here").is_empty());
        assert!(values("").is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "42 7.5 0.0031 900 12";
        assert_eq!(extract_leading_digits(text), extract_leading_digits(text));
    }

    #[test]
    fn test_leading_digit_bounds() {
        assert!(LeadingDigit::new(0).is_none());
        assert!(LeadingDigit::new(10).is_none());
        assert_eq!(LeadingDigit::new(9).map(LeadingDigit::index), Some(8));
    }

    #[test]
    fn test_digit_counts() {
        let digits = extract_leading_digits("1 12 2 9 0.9");
        let counts = DigitCounts::from_digits(&digits);

        assert_eq!(counts.total(), 5);
        assert_eq!(counts.as_array(), &[2, 1, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(counts.iter().count(), 9);
        assert_eq!(counts.iter().next(), Some((1, 2)));
        assert_eq!(counts.get(LeadingDigit::new(9).unwrap()), 2);
        assert_eq!(counts.get(LeadingDigit::new(5).unwrap()), 0);
    }
}
