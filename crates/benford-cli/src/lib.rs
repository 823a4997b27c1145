//! Benford CLI library.
//!
//! Argument parsing, configuration and output formatting for the `benford`
//! command-line tool. The analysis itself lives in `benford-domain`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
