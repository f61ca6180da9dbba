#![forbid(unsafe_code)]

//! Parallel execution engine for running rules over a bibliography
//!
//! This module provides the ExecutionEngine which evaluates every enabled
//! rule against the checked subset of records using rayon, then attaches the
//! findings to the records in rule order.

use crate::bib::Record;
use crate::rules::{ExecutionContext, Finding, RuleRegistry};
use crate::types::Severity;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Result of executing all rules against a bibliography
#[derive(Debug)]
pub struct ExecutionResult {
    /// Every input record, in input order, with its issues attached
    pub records: Vec<Record>,
    /// Number of records the rules looked at (articles and conference papers)
    pub records_checked: usize,
    /// Number of rules executed
    pub rules_executed: usize,
}

impl ExecutionResult {
    /// Total number of issues with the given severity across all records
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .map(|r| r.count_severity(severity))
            .sum()
    }

    /// Records that have at least one issue
    pub fn records_with_issues(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.has_issues())
    }
}

/// Execution engine that coordinates parallel rule execution
///
/// The engine:
/// - Selects the records rules apply to (articles and conference papers)
/// - Runs all enabled rules in parallel over that read-only subset
/// - Attaches findings in canonical rule order, so the result does not
///   depend on scheduling
pub struct ExecutionEngine {
    registry: Arc<RuleRegistry>,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine with the provided rule registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Execute all rules against the records
    ///
    /// Returns the same records, in the same order, each carrying the issues
    /// found for it. Records outside the checked subset come back untouched.
    pub fn execute(&self, mut records: Vec<Record>, ctx: &ExecutionContext) -> ExecutionResult {
        let input_len = records.len();

        let checked: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind().is_checked())
            .map(|(i, _)| i)
            .collect();
        debug!(
            records = input_len,
            checked = checked.len(),
            rules = self.registry.len(),
            "Running rule pipeline"
        );

        let per_rule: Vec<Vec<Finding>> = {
            let subset: Vec<&Record> = checked.iter().map(|&i| &records[i]).collect();
            let rules: Vec<_> = self.registry.iter_rules().collect();
            rules
                .par_iter()
                .map(|rule| {
                    let findings = rule.check(&subset, ctx);
                    debug!(rule = %rule.id(), findings = findings.len(), "Rule finished");
                    findings
                })
                .collect()
        };

        for finding in per_rule.into_iter().flatten() {
            records[checked[finding.record]].push_issue(finding.issue);
        }

        assert_eq!(records.len(), input_len, "rule pipeline changed record count");

        ExecutionResult {
            records_checked: checked.len(),
            rules_executed: self.registry.len(),
            records,
        }
    }
}
