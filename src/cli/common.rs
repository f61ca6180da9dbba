//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration and
//! choosing terminal colors.

use crate::cli::args::ColorChoice;
use crate::config::{CONFIG_FILE_NAME, ColorOption, Config};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

/// The check ran, whether or not issues were found
pub const EXIT_SUCCESS: i32 = 0;
/// The input bibliography is missing or unreadable
pub const EXIT_INPUT_ERROR: i32 = 1;
/// Invalid configuration, or the report could not be written
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Load bibcheck.toml configuration
///
/// An explicit path must exist. Without one, `bibcheck.toml` in the working
/// directory is used if present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Loading configuration");
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        debug!(path = %default_path.display(), "Loading configuration");
        Config::load(default_path)
    } else {
        debug!("No configuration file, using defaults");
        Ok(Config::default())
    }
}

/// Resolve the color choice for stdout
///
/// The command-line flag wins over the configuration file. `auto` only
/// colors when stdout is a terminal.
pub(crate) fn stdout_color(flag: Option<ColorChoice>, config: &Config) -> termcolor::ColorChoice {
    let option = flag.map(ColorOption::from).unwrap_or(config.output.color);
    match option {
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
        ColorOption::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorOption::Auto => termcolor::ColorChoice::Never,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_INPUT_ERROR, 1);
        assert_eq!(EXIT_CONFIG_ERROR, 2);
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/bibcheck.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_explicit_config_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[arxiv]\nrecent_years = 4\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.arxiv.recent_years, 4);
    }

    #[test]
    fn test_color_flag_overrides_config() {
        let config = Config::parse("[output]\ncolor = \"always\"\n").unwrap();
        assert_eq!(
            stdout_color(Some(ColorChoice::Never), &config),
            termcolor::ColorChoice::Never
        );
        assert_eq!(stdout_color(None, &config), termcolor::ColorChoice::Always);
    }
}
