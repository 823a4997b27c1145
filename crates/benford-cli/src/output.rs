//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use benford_domain::{AnalysisResult, ExpectedDistribution, LeadingDigit};
use colored::*;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(result),
            OutputFormat::Table => Ok(self.format_analysis_table(result)),
            OutputFormat::Quiet => Ok(result.conforms_to_benford().to_string()),
        }
    }

    fn format_analysis_json(&self, result: &AnalysisResult) -> Result<String> {
        let actual: BTreeMap<u8, u64> = result.actual_distribution().iter().collect();
        let expected: BTreeMap<_, _> = result.expected_distribution().iter().collect();
        let value = serde_json::json!({
            "actualDistribution": actual,
            "expectedDistribution": expected,
            "chiSquareStatistic": result.chi_square_statistic(),
            "pValue": result.p_value(),
            "conformsToBenford": result.conforms_to_benford(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_analysis_table(&self, result: &AnalysisResult) -> String {
        let total = result.sample_size();
        let mut builder = Builder::default();
        builder.push_record(["Digit", "Observed", "Observed %", "Expected %"]);

        let actual = result.actual_distribution();
        let expected = result.expected_distribution();
        for digit in (1..=9).filter_map(LeadingDigit::new) {
            let count = actual.get(digit);
            let observed_pct = count as f64 / total as f64 * 100.0;
            builder.push_record([
                digit.to_string(),
                count.to_string(),
                format!("{:.2}", observed_pct),
                format!("{:.2}", expected.percentage(digit)),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let verdict = if result.conforms_to_benford() {
            self.success("Conforms to Benford's Law")
        } else {
            self.error("Does not conform to Benford's Law")
        };

        format!(
            "{}\n{}\n{}\n{}\n{}",
            table,
            self.info(&format!("Sample size: {}", total)),
            self.info(&format!("Chi-square: {:.6}", result.chi_square_statistic())),
            self.info(&format!("p-value: {:.6}", result.p_value())),
            verdict
        )
    }

    /// Format the theoretical distribution.
    pub fn format_expected(&self, distribution: &ExpectedDistribution) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: BTreeMap<_, _> = distribution.iter().collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Digit", "Expected %"]);
                for (digit, pct) in distribution.iter() {
                    builder.push_record([digit.to_string(), pct.to_string()]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(distribution
                .iter()
                .map(|(_, pct)| pct.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format extracted leading digits in encounter order.
    pub fn format_digits(&self, digits: &[LeadingDigit]) -> Result<String> {
        let values: Vec<u8> = digits.iter().map(|d| d.get()).collect();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&values)?),
            OutputFormat::Quiet => Ok(values
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")),
            OutputFormat::Table => {
                if values.is_empty() {
                    return Ok(self.warning("No numbers found."));
                }
                let joined = values
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                Ok(format!(
                    "{}\n{}",
                    joined,
                    self.info(&format!("{} leading digit(s)", values.len()))
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benford_domain::{analyze, expected_distribution, extract_leading_digits};

    const SAMPLE: &str = "12 150 1.5 19 2 24 3 35 4 5 61 7 8 9 1000 11";

    fn sample_result() -> AnalysisResult {
        analyze(SAMPLE, 0.05).unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&sample_result()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["actualDistribution"]["1"], 6);
        assert!(value["expectedDistribution"]["1"].is_number());
        assert!(value["pValue"].is_number());
        assert!(value["conformsToBenford"].is_boolean());
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = sample_result();
        let output = formatter.format_analysis(&result).unwrap();
        assert_eq!(output, result.conforms_to_benford().to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&sample_result()).unwrap();
        assert!(output.contains("Digit"));
        assert!(output.contains("Expected %"));
        assert!(output.contains("30.10"));
        assert!(output.contains("37.50"));
        assert!(output.contains("Sample size: 16"));
    }

    #[test]
    fn test_expected_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_expected(expected_distribution().unwrap())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "30.103000");
        assert_eq!(lines[8], "4.575749");
    }

    #[test]
    fn test_digits_formats() {
        let digits = extract_leading_digits("100, 200.25, 030, 0.47, 0031.3");

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_digits(&digits).unwrap(), "1 2 3 4 3");

        let json = Formatter::new(OutputFormat::Json, false);
        assert_eq!(json.format_digits(&digits).unwrap(), "[1,2,3,4,3]");
    }

    #[test]
    fn test_empty_digits() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_digits(&[]).unwrap();
        assert!(output.contains("No numbers found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
