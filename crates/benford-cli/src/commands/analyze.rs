//! Analyze command implementation.

use super::read_input;
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use benford_domain::analyze;
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let significance_level = args
        .significance_level
        .unwrap_or(config.settings.significance_level);
    let text = read_input(args.input)?;

    let result = analyze(&text, significance_level)?;
    info!(
        sample_size = result.sample_size(),
        p_value = result.p_value(),
        conforms = result.conforms_to_benford(),
        "Analysis complete"
    );

    println!("{}", formatter.format_analysis(&result)?);
    Ok(())
}
