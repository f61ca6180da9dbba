#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One issue object per attached issue (records in input order, issues in
//!    rule order)
//! 2. One summary object

use crate::engine::ExecutionResult;
use crate::types::Severity;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats execution results as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the execution result as JSONL
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for record in result.records_with_issues() {
            for issue in record.issues() {
                let line = IssueLine {
                    record_type: "issue",
                    key: record.citation_key(),
                    line: record.line_number(),
                    kind: record.kind().as_str(),
                    title: record.title(),
                    severity: issue.severity(),
                    issue: issue.issue_type().as_str(),
                    legend: issue.legend(),
                    message: issue.message(),
                };
                push_json_line(&mut output, &line);
            }
        }

        let summary = SummaryLine {
            record_type: "summary",
            entries: result.records.len(),
            checked: result.records_checked,
            rules: result.rules_executed,
            errors: result.count_severity(Severity::Error),
            warnings: result.count_severity(Severity::Warning),
        };
        push_json_line(&mut output, &summary);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn push_json_line(output: &mut String, value: &impl Serialize) {
    if let Ok(json) = serde_json::to_string(value) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Issue record for JSONL output
#[derive(Debug, Serialize)]
struct IssueLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    key: &'a str,
    line: usize,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    severity: Severity,
    issue: &'static str,
    legend: &'static str,
    message: String,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryLine {
    #[serde(rename = "type")]
    record_type: &'static str,
    entries: usize,
    checked: usize,
    rules: usize,
    errors: usize,
    warnings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bib::parse_str;
    use crate::engine::ExecutionEngine;
    use crate::rules::{ExecutionContext, RuleRegistry};
    use serde_json::Value;

    fn lines(source: &str) -> Vec<Value> {
        let result = ExecutionEngine::new(RuleRegistry::builtin())
            .execute(parse_str(source), &ExecutionContext::new(2025));
        JsonlFormatter::new()
            .format(&result)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_issue_lines_then_summary() {
        let values = lines(
            "@article{a,\n  title = {T},\n  author = {X},\n  journal = {Journal},\n  \
             year = 2020,\n  volume = 1,\n  number = 2,\n  pages = {7},\n}\n",
        );
        assert_eq!(values.len(), 2);

        let issue = &values[0];
        assert_eq!(issue["type"], "issue");
        assert_eq!(issue["key"], "a");
        assert_eq!(issue["line"], 1);
        assert_eq!(issue["kind"], "article");
        assert_eq!(issue["title"], "T");
        assert_eq!(issue["severity"], "error");
        assert_eq!(issue["issue"], "only-one-page");
        assert_eq!(issue["legend"], "Only one page");

        let summary = &values[1];
        assert_eq!(summary["type"], "summary");
        assert_eq!(summary["entries"], 1);
        assert_eq!(summary["checked"], 1);
        assert_eq!(summary["errors"], 1);
        assert_eq!(summary["warnings"], 0);
    }

    #[test]
    fn test_empty_input_has_summary_only() {
        let values = lines("");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["type"], "summary");
        assert_eq!(values[0]["entries"], 0);
    }
}
