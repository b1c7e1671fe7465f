//! CLI module for conftoml
//!
//! This module provides the command-line interface for the converter.
//!
//! ## Usage
//!
//! - `conftoml <INPUT> <OUTPUT>` - Convert INPUT and write TOML to OUTPUT
//! - `conftoml <INPUT>` - Convert INPUT and print TOML to stdout
//! - `conftoml --check <FILE>` - Convert in memory and report errors only
//! - `conftoml --lex <FILE>` / `--parse <FILE>` - Debug views of the frontend
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::ConvertConfig;
use crate::version::CONFTOML_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Convert a constant-configuration file to TOML
#[derive(Parser, Debug)]
#[command(name = "conftoml")]
#[command(version = CONFTOML_VERSION)]
#[command(about = "Convert a constant-configuration file to TOML", long_about = None)]
pub struct Cli {
    /// Configuration file to convert
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the TOML (default: stdout)
    #[arg(value_name = "OUTPUT", requires = "input")]
    pub output: Option<PathBuf>,

    /// Drop lines that match no rule instead of failing
    #[arg(long = "skip-unrecognized")]
    pub skip_unrecognized: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "input")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "input")]
    pub parse_file: Option<PathBuf>,

    /// Convert without writing output; report errors only
    #[arg(long = "check", value_name = "FILE", conflicts_with = "input")]
    pub check_file: Option<PathBuf>,
}

impl Cli {
    /// The conversion settings selected by the flags.
    pub fn config(&self) -> ConvertConfig {
        if self.skip_unrecognized {
            ConvertConfig::new().skipping_unrecognized()
        } else {
            ConvertConfig::new()
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file);
    }
    if let Some(file) = &cli.check_file {
        return commands::check_file(file, config);
    }

    match (cli.input, cli.output) {
        (Some(input), Some(output)) => commands::convert_file(&input, &output, config),
        (Some(input), None) => commands::print_file(&input, config),
        (None, _) => Err(CliError::failure(
            "Error: no input file given (see `conftoml --help`)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::UnrecognizedLinePolicy;

    #[test]
    fn test_cli_parse_input_output() {
        let cli = Cli::try_parse_from(["conftoml", "in.conf", "out.toml"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("in.conf")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.toml")));
    }

    #[test]
    fn test_cli_parse_input_only() {
        let cli = Cli::try_parse_from(["conftoml", "in.conf"]).unwrap();
        assert!(cli.input.is_some());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_skip_unrecognized_maps_to_config() {
        let cli = Cli::try_parse_from(["conftoml", "--skip-unrecognized", "in.conf"]).unwrap();
        assert_eq!(cli.config().unrecognized_lines, UnrecognizedLinePolicy::Skip);

        let cli = Cli::try_parse_from(["conftoml", "in.conf"]).unwrap();
        assert_eq!(cli.config().unrecognized_lines, UnrecognizedLinePolicy::Reject);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["conftoml", "--lex", "a.conf"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["conftoml", "--parse", "a.conf"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["conftoml", "--check", "a.conf"]).unwrap();
        assert!(cli.check_file.is_some());
    }

    #[test]
    fn test_cli_debug_flag_conflicts_with_input() {
        assert!(Cli::try_parse_from(["conftoml", "--lex", "a.conf", "b.conf"]).is_err());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["conftoml"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
