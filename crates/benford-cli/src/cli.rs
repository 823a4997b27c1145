//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Benford CLI - Test the numbers in a text against Benford's Law.
#[derive(Debug, Parser)]
#[command(name = "benford")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BENFORD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict or bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze the numbers in a text for conformance with Benford's Law
    Analyze(AnalyzeArgs),

    /// Print the theoretical Benford distribution
    Expected,

    /// Print the leading digits extracted from a text
    Digits(InputArgs),
}

/// Where to read the text from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Significance level in [0, 1] (defaults to the configured value)
    #[arg(short = 's', long)]
    pub significance_level: Option<f64>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
