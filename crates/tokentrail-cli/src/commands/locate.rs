//! Locate command implementation.

use super::load_corpus;
use crate::cli::LocateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tokentrail_extractor::Locator;

/// Execute the locate command.
pub fn execute_locate(args: LocateArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", locate_report(args, formatter)?);
    Ok(())
}

/// List every transaction whose body contains the value, in capture order.
pub fn locate_report(args: LocateArgs, formatter: &Formatter) -> Result<String> {
    if args.value.is_empty() {
        return Err(CliError::InvalidInput("Value must not be empty".to_string()));
    }

    let corpus = load_corpus(&args.har)?;
    let found = Locator::new(&corpus).find_all_containing(&args.value);
    formatter.format_locations(&args.value, &found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{capture, T1, T2};
    use crate::config::OutputFormat;

    fn args(file: &tempfile::NamedTempFile, value: &str) -> LocateArgs {
        LocateArgs {
            har: file.path().to_path_buf(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_locate_in_capture_order() {
        let file = capture();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        assert_eq!(locate_report(args(&file, T1), &formatter).unwrap(), "0\n1");
        assert_eq!(locate_report(args(&file, T2), &formatter).unwrap(), "0");
    }

    #[test]
    fn test_locate_missing_value() {
        let file = capture();
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = locate_report(args(&file, "nowhere"), &formatter).unwrap();
        assert_eq!(output, "⚠ No reference found for: nowhere");
    }

    #[test]
    fn test_locate_empty_value() {
        let file = capture();
        let formatter = Formatter::new(OutputFormat::Text, false);
        let result = locate_report(args(&file, ""), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
