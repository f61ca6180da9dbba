//! Initialize a bibcheck configuration
//!
//! Writes a commented default bibcheck.toml.

use crate::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::Path;

/// Default content for bibcheck.toml
const DEFAULT_BIBCHECK_TOML: &str = r#"# bibcheck configuration

[rules]
# All built-in rules are enabled by default. Run 'bibcheck list' to see them.
# Disable a rule: rule-name = false
# venue-abbreviation = false

[abbreviations]
# Acronyms that may appear in journal and booktitle names
allowed = ["ACM", "IEEE", "SIAM", "MIT"]

[capitalization]
# Extra words allowed to stay lowercase in journal and booktitle names
lowercase_words = []

[arxiv]
# A preprint at most this many years old is a warning, older ones an error
recent_years = 1

[output]
format = "human"  # human | jsonl | html
color = "auto"    # auto | always | never
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

impl InitResult {
    /// Create a new empty InitResult
    fn new() -> Self {
        Self {
            created: Vec::new(),
            skipped: Vec::new(),
            overwritten: Vec::new(),
        }
    }
}

/// Run the init command in the current directory
///
/// # Arguments
/// * `force` - If true, overwrite an existing file. If false, skip it.
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    run_init_in(Path::new("."), force)
}

/// Write bibcheck.toml into `dir`
pub fn run_init_in(dir: &Path, force: bool) -> Result<InitResult, InitError> {
    let mut result = InitResult::new();
    handle_file(
        &dir.join(CONFIG_FILE_NAME),
        DEFAULT_BIBCHECK_TOML,
        force,
        &mut result,
    )?;
    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    path: &Path,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path_str = path_to_string(path)?;

    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path_str
        )));
    }

    if path.exists() {
        if force {
            fs::write(path, content)?;
            result.overwritten.push(path_str);
        } else {
            result.skipped.push(path_str);
        }
    } else {
        fs::write(path, content)?;
        result.created.push(path_str);
    }

    Ok(())
}

/// Convert a path to a string representation
fn path_to_string(path: &Path) -> Result<String, InitError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InitError::Path(format!("Invalid UTF-8 in path: {:?}", path)))
}
