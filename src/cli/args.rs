//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Report format for the check command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
    /// Standalone HTML page with filters
    Html,
}

impl From<OutputFormat> for crate::config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => crate::config::OutputFormat::Human,
            OutputFormat::Jsonl => crate::config::OutputFormat::Jsonl,
            OutputFormat::Html => crate::config::OutputFormat::Html,
        }
    }
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for crate::config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => crate::config::ColorOption::Auto,
            ColorChoice::Always => crate::config::ColorOption::Always,
            ColorChoice::Never => crate::config::ColorOption::Never,
        }
    }
}

/// bibcheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "bibcheck")]
#[command(about = "Style linter for BibTeX bibliographies")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides the configuration file)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available bibcheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a .bib file and report style issues
    Check(CheckArgs),

    /// List rules and issue types
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: ListFormat,

        /// Configuration file (defaults to ./bibcheck.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default bibcheck.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of the check command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Bibliography to check
    pub input: PathBuf,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,

    /// Report format (overrides the configuration file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to ./bibcheck.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
