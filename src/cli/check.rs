//! Check command implementation
//!
//! This module implements the `bibcheck check` command, which:
//! - Parses the input bibliography
//! - Loads configuration from bibcheck.toml
//! - Runs all enabled rules
//! - Formats the report (human, JSONL or HTML) to stdout or a file
//! - Returns the exit code

use crate::bib::parse_file;
use crate::cli::args::{CheckArgs, ColorChoice};
use crate::cli::common::{
    EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, load_config, stdout_color,
};
use crate::config::OutputFormat;
use crate::engine::{ExecutionEngine, ExecutionResult};
use crate::error::{BibcheckError, ConfigError};
use crate::output::{HtmlFormatter, HumanFormatter, JsonlFormatter};
use crate::rules::{ExecutionContext, RuleRegistry};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{NoColor, StandardStream};
use tracing::{debug, warn};

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("{0}")]
    Input(#[from] BibcheckError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write report to '{}': {source}", path.display())]
    Output { path: PathBuf, source: io::Error },

    #[error("Failed to write report: {0}")]
    Stdout(#[source] io::Error),
}

impl CheckError {
    fn exit_code(&self) -> i32 {
        match self {
            CheckError::Input(_) => EXIT_INPUT_ERROR,
            CheckError::Config(_) | CheckError::Output { .. } | CheckError::Stdout(_) => {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: The check ran (issues found or not)
/// - 1: The input file is missing or unreadable
/// - 2: Invalid configuration or unwritable report
pub fn run_check(args: &CheckArgs, color: Option<ColorChoice>) -> i32 {
    match run_check_inner(args, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(args: &CheckArgs, color: Option<ColorChoice>) -> Result<(), CheckError> {
    let records = parse_file(&args.input)?;
    if records.is_empty() {
        warn!(path = %args.input.display(), "No entries found");
    }

    let config = load_config(args.config.as_deref())?;

    let registry = RuleRegistry::from_config(&config);
    if registry.is_empty() {
        warn!("No rules are enabled");
    }

    let result = ExecutionEngine::new(registry).execute(records, &ExecutionContext::current());
    debug!(
        entries = result.records.len(),
        checked = result.records_checked,
        "Check finished"
    );

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);

    match &args.output {
        Some(path) => write_report_file(&result, format, path),
        None => write_report_stdout(&result, format, stdout_color(color, &config))
            .map_err(CheckError::Stdout),
    }
}

/// Render the report as text; files never get color codes
fn render_plain(result: &ExecutionResult, format: OutputFormat) -> io::Result<String> {
    Ok(match format {
        OutputFormat::Human => {
            let mut out = NoColor::new(Vec::new());
            HumanFormatter::new().write(result, &mut out)?;
            String::from_utf8_lossy(&out.into_inner()).into_owned()
        }
        OutputFormat::Jsonl => JsonlFormatter::new().format(result),
        OutputFormat::Html => HtmlFormatter::new().format(result),
    })
}

fn write_report_file(
    result: &ExecutionResult,
    format: OutputFormat,
    path: &Path,
) -> Result<(), CheckError> {
    let to_error = |source| CheckError::Output {
        path: path.to_path_buf(),
        source,
    };
    let report = render_plain(result, format).map_err(to_error)?;
    fs::write(path, report).map_err(to_error)?;
    debug!(path = %path.display(), "Report written");
    Ok(())
}

fn write_report_stdout(
    result: &ExecutionResult,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            let stdout = StandardStream::stdout(color);
            let mut lock = stdout.lock();
            HumanFormatter::new().write(result, &mut lock)
        }
        _ => {
            let report = render_plain(result, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()
        }
    }
}
