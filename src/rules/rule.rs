#![forbid(unsafe_code)]

//! Core Rule trait and related types for defining and executing rules

use crate::bib::Record;
use crate::issues::{Issue, IssueType};
use crate::types::RuleId;

/// Execution context provided to rules when they execute
///
/// Holds the facts about the run itself, as opposed to the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Calendar year the check is performed in
    pub reference_year: i32,
}

impl ExecutionContext {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Context for a run happening now, using the local clock
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year())
    }
}

/// An issue detected by a rule, addressed to one record
///
/// `record` indexes the slice the rule was given. A rule that flags several
/// records with the same problem returns one finding per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub record: usize,
    pub issue: Issue,
}

impl Finding {
    pub fn new(record: usize, issue: Issue) -> Self {
        Self { record, issue }
    }
}

/// Trait that all rules must implement
///
/// Rules only read records. The engine attaches the returned findings, which
/// keeps every rule independent of the others and lets them run in parallel.
pub trait Rule: Send + Sync {
    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Returns the issue types this rule can emit
    fn issue_types(&self) -> &[IssueType];

    /// Checks the records and returns every violation found
    ///
    /// `records` is the checked subset: articles and conference papers only.
    fn check(&self, records: &[&Record], ctx: &ExecutionContext) -> Vec<Finding>;
}

/// Whether a venue name marks an arXiv preprint
pub(crate) fn mentions_arxiv(name: &str) -> bool {
    name.to_lowercase().contains("arxiv")
}
