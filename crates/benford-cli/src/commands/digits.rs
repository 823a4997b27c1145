//! Digits command implementation.

use super::read_input;
use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::Formatter;
use benford_domain::extract_leading_digits;
use tracing::debug;

/// Execute the digits command.
pub fn execute_digits(args: InputArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(args)?;
    let digits = extract_leading_digits(&text);
    debug!("Extracted {} leading digit(s)", digits.len());

    println!("{}", formatter.format_digits(&digits)?);
    Ok(())
}
