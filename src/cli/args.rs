//! Command line argument parsing and validation.
//!
//! The tool takes exactly two positionals and nothing else: no flags, no
//! options, no built-in help. Any other shape is a usage error.

use crate::error::CliError;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed on argument errors.
pub const USAGE: &str = "Usage: extract_icon <source_app_path> <output_icns_path>";

/// Extract an application's icon into an .icns file
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "extract_icon",
    about = "Extract an application's icon into an .icns file",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Application bundle (or any file) whose icon is extracted
    #[arg(index = 1, value_name = "SOURCE_APP_PATH", allow_hyphen_values = true)]
    pub source: PathBuf,

    /// Destination .icns file
    #[arg(index = 2, value_name = "OUTPUT_ICNS_PATH", allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl Args {
    /// Parse the process arguments
    pub fn parse_args() -> Result<Self, CliError> {
        Self::parse_from_iter(std::env::args_os())
    }

    /// Parse an explicit argument list, program name first
    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        // Count before clap, which swallows a `--` separator.
        if args.len() != 3 {
            log::debug!("Rejected {} arguments", args.len().saturating_sub(1));
            return Err(CliError::Usage);
        }

        Self::try_parse_from(args).map_err(|e| {
            log::debug!("Rejected arguments: {:?}", e.kind());
            CliError::Usage
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let args =
            Args::parse_from_iter(["extract_icon", "/Applications/Calculator.app", "/tmp/out.icns"])
                .unwrap();
        assert_eq!(args.source, PathBuf::from("/Applications/Calculator.app"));
        assert_eq!(args.output, PathBuf::from("/tmp/out.icns"));
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        assert!(matches!(
            Args::parse_from_iter(["extract_icon"]),
            Err(CliError::Usage)
        ));
    }

    #[test]
    fn test_one_argument_is_usage_error() {
        assert!(Args::parse_from_iter(["extract_icon", "/a.app"]).is_err());
    }

    #[test]
    fn test_three_arguments_is_usage_error() {
        assert!(Args::parse_from_iter(["extract_icon", "/a.app", "/b.icns", "extra"]).is_err());
    }

    #[test]
    fn test_separator_counts_as_an_argument() {
        assert!(matches!(
            Args::parse_from_iter(["extract_icon", "--", "/a.app", "/b.icns"]),
            Err(CliError::Usage)
        ));
    }

    #[test]
    fn test_help_flag_is_not_special() {
        assert!(Args::parse_from_iter(["extract_icon", "--help"]).is_err());
        let args = Args::parse_from_iter(["extract_icon", "-h", "-V"]).unwrap();
        assert_eq!(args.source, PathBuf::from("-h"));
        assert_eq!(args.output, PathBuf::from("-V"));
    }

    #[test]
    fn test_usage_line_names_both_arguments() {
        assert!(USAGE.starts_with("Usage:"));
        assert!(USAGE.contains("<source_app_path>"));
        assert!(USAGE.contains("<output_icns_path>"));
    }
}
