//! Command implementations.

pub mod analyze;
pub mod digits;
pub mod expected;

pub use self::analyze::execute_analyze;
pub use self::digits::execute_digits;
pub use self::expected::execute_expected;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read the input text from the positional argument, a file or stdin.
pub(crate) fn read_input(args: InputArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = args.file {
        Ok(fs::read_to_string(file_path)?)
    } else if let Some(text) = args.text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Provide TEXT, --file or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_positional_text() {
        let args = InputArgs {
            text: Some("1 2 3".to_string()),
            file: None,
            stdin: false,
        };
        assert_eq!(read_input(args).unwrap(), "1 2 3");
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Totals: 120, 45, 9").unwrap();

        let args = InputArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            stdin: false,
        };
        assert_eq!(read_input(args).unwrap(), "Totals: 120, 45, 9");
    }

    #[test]
    fn test_no_source() {
        let args = InputArgs {
            text: None,
            file: None,
            stdin: false,
        };
        assert!(matches!(read_input(args), Err(CliError::InvalidInput(_))));
    }
}
