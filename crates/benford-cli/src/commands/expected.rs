//! Expected command implementation.

use crate::error::Result;
use crate::output::Formatter;
use benford_domain::expected_distribution;

/// Execute the expected command.
pub fn execute_expected(formatter: &Formatter) -> Result<()> {
    let distribution = expected_distribution()?;
    println!("{}", formatter.format_expected(distribution)?);
    Ok(())
}
