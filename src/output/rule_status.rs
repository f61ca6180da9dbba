#![forbid(unsafe_code)]

//! RuleStatus output formatters
//!
//! This module provides formatters for displaying rule information from the
//! `bibcheck list` command. It supports both human-readable and JSONL output
//! formats.

use crate::issues::IssueType;
use serde::Serialize;

/// Status information for a single rule
#[derive(Debug, Clone)]
pub struct RuleStatus {
    pub rule_id: String,
    pub description: String,
    pub enabled: bool,
    pub issue_types: Vec<IssueType>,
}

/// Human-readable formatter for rule status
pub struct RuleStatusHumanFormatter;

impl RuleStatusHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleStatusHumanFormatter
    }

    /// Format rule statuses followed by the issue taxonomy
    pub fn format(&self, statuses: &[RuleStatus]) -> String {
        let mut output = String::new();

        let enabled = statuses.iter().filter(|s| s.enabled).count();
        output.push_str(&format!(
            "Rules ({} of {} enabled):\n",
            enabled,
            statuses.len()
        ));
        output.push('\n');

        for status in statuses {
            let state = if status.enabled { "enabled" } else { "disabled" };
            output.push_str(&format!("{} ({})\n", status.rule_id, state));
            output.push_str(&format!("  Description: {}\n", status.description));
            let tags: Vec<&str> = status.issue_types.iter().map(|t| t.as_str()).collect();
            output.push_str(&format!("  Issues: {}\n", tags.join(", ")));
            output.push('\n');
        }

        output.push_str("Issue types:\n");
        for issue_type in IssueType::ALL {
            output.push_str(&format!(
                "  {:<34}{}\n",
                issue_type.as_str(),
                issue_type.legend()
            ));
        }

        output
    }
}

impl Default for RuleStatusHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for rule status
#[derive(Debug, Serialize)]
struct JsonlRuleStatus<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule_id: &'a str,
    description: &'a str,
    enabled: bool,
    issues: Vec<&'static str>,
}

/// JSONL output structure for one issue type
#[derive(Debug, Serialize)]
struct JsonlIssueType {
    #[serde(rename = "type")]
    record_type: &'static str,
    issue: &'static str,
    legend: &'static str,
}

/// JSONL formatter for rule status
pub struct RuleStatusJsonlFormatter;

impl RuleStatusJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleStatusJsonlFormatter
    }

    /// Format rule statuses as JSONL, then one line per issue type
    pub fn format(&self, statuses: &[RuleStatus]) -> String {
        let mut output = String::new();

        for status in statuses {
            let line = JsonlRuleStatus {
                record_type: "rule",
                rule_id: &status.rule_id,
                description: &status.description,
                enabled: status.enabled,
                issues: status.issue_types.iter().map(|t| t.as_str()).collect(),
            };
            super::jsonl::push_json_line(&mut output, &line);
        }

        for issue_type in IssueType::ALL {
            let line = JsonlIssueType {
                record_type: "issue_type",
                issue: issue_type.as_str(),
                legend: issue_type.legend(),
            };
            super::jsonl::push_json_line(&mut output, &line);
        }

        output
    }
}

impl Default for RuleStatusJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
