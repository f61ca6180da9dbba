//! List command implementation
//!
//! This module implements the `bibcheck list` command, which:
//! - Lists all built-in rules in execution order with their enabled state
//! - Lists every issue type with its tag and legend
//! - Supports both human-readable and JSONL output formats

use crate::cli::args::ListFormat;
use crate::cli::common::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, load_config};
use crate::config::Config;
use crate::error::ConfigError;
use crate::output::{RuleStatus, RuleStatusHumanFormatter, RuleStatusJsonlFormatter};
use crate::rules::RuleRegistry;
use std::io::{self, Write};
use std::path::Path;

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Invalid configuration or output error
pub fn run_list(format: ListFormat, config_path: Option<&Path>) -> i32 {
    match run_list_inner(format, config_path) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Internal implementation of list command
fn run_list_inner(format: ListFormat, config_path: Option<&Path>) -> Result<(), ListError> {
    let config = load_config(config_path)?;
    let statuses = build_rule_statuses(&config);

    let output = match format {
        ListFormat::Human => RuleStatusHumanFormatter::new().format(&statuses),
        ListFormat::Jsonl => RuleStatusJsonlFormatter::new().format(&statuses),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Describe every built-in rule, marking the ones the configuration disables
fn build_rule_statuses(config: &Config) -> Vec<RuleStatus> {
    RuleRegistry::builtin()
        .iter_rules()
        .map(|rule| RuleStatus {
            rule_id: rule.id().as_str().to_string(),
            description: rule.description().to_string(),
            enabled: config.is_rule_enabled(rule.id().as_str()),
            issue_types: rule.issue_types().to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin::BUILTIN_RULE_IDS;

    #[test]
    fn test_statuses_in_execution_order() {
        let statuses = build_rule_statuses(&Config::default());
        let ids: Vec<&str> = statuses.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(ids, BUILTIN_RULE_IDS);
        assert!(statuses.iter().all(|s| s.enabled));
    }

    #[test]
    fn test_disabled_rules_marked() {
        let config = Config::parse("[rules]\nduplicates = false\n").unwrap();
        let statuses = build_rule_statuses(&config);
        let disabled: Vec<&str> = statuses
            .iter()
            .filter(|s| !s.enabled)
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(disabled, vec!["duplicates"]);
        assert_eq!(statuses.len(), BUILTIN_RULE_IDS.len());
    }
}
