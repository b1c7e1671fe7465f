//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};

use crate::config::ConvertConfig;
use crate::convert::{self, Converter};
use crate::frontend::diagnostics::ConvertError;
use crate::frontend::{comments, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with a size check.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed (doesn't exist, permission denied, etc.)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Render a conversion error with the failing line shown in context.
pub fn render_error(file_path: &Path, source: &str, err: ConvertError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(
        file_path.display().to_string(),
        source.to_string(),
    ));
    format!("{report:?}")
}

/// Convert `input` and write the TOML to `output`.
pub fn convert_file(input: &Path, output: &Path, config: ConvertConfig) -> CliResult<ExitCode> {
    let mut converter = Converter::with_config(config);
    match converter.parse(input, output) {
        Ok(()) => {
            tracing::info!(input = %input.display(), output = %output.display(), "converted");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // I/O errors have no line to show; everything else does.
            let message = match fs::read_to_string(input) {
                Ok(source) if err.line().is_some() => render_error(input, &source, err),
                _ => format!("{:?}", Report::new(err)),
            };
            Err(CliError::failure(message))
        }
    }
}

/// Convert `input` and print the TOML to stdout.
pub fn print_file(input: &Path, config: ConvertConfig) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let toml = Converter::with_config(config)
        .convert_str(&source)
        .map_err(|err| CliError::failure(render_error(input, &source, err)))?;
    print!("{toml}");
    Ok(ExitCode::SUCCESS)
}

/// Convert in memory and report errors without writing anything.
pub fn check_file(file_path: &Path, config: ConvertConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut converter = Converter::with_config(config);
    converter
        .convert_str(&source)
        .map_err(|err| CliError::failure(render_error(file_path, &source, err)))?;
    println!(
        "✓ {} ({} constants)",
        file_path.display(),
        converter.symbols().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display the token stream of the comment-stripped file.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stripped = comments::strip_block_comments(&source);
    for tok in lexer::lex(stripped.text()) {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the classified lines.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stripped = comments::strip_block_comments(&source);
    let tokens = lexer::lex(stripped.text());

    match parser::parse(stripped.text(), &tokens) {
        Ok(lines) => {
            println!("{:#?}", lines);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let located = convert::locate(&source, &stripped, err.node, err.span);
            Err(CliError::failure(render_error(file_path, &source, located)))
        }
    }
}
