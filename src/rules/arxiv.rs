#![forbid(unsafe_code)]

//! arXiv preprint classification
//!
//! A preprint cited as `@article` may have been published since; older ones
//! most likely were. A preprint cited as `@inproceedings` is mistyped.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::rule::mentions_arxiv;
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::{EntryKind, RuleId, Severity};

pub const ID: &str = "arxiv-status";

/// Preprints at most this many years older than the reference year are recent
pub const DEFAULT_RECENT_YEARS: u32 = 1;

const ISSUE_TYPES: &[IssueType] = &[IssueType::ArxivPaper, IssueType::ArxivAsInProceedings];

/// Reports arXiv preprints that should be re-checked or re-typed
pub struct ArxivStatusRule {
    id: RuleId,
    recent_years: u32,
}

impl ArxivStatusRule {
    pub fn new(recent_years: u32) -> Self {
        Self {
            id: RuleId::builtin(ID),
            recent_years,
        }
    }

    /// Recent preprints are only a warning. Unparseable years count as old.
    fn severity_for(&self, year: &str, ctx: &ExecutionContext) -> Severity {
        let oldest_recent = i64::from(ctx.reference_year) - i64::from(self.recent_years);
        match year.parse::<i64>() {
            Ok(year) if year >= oldest_recent => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl Default for ArxivStatusRule {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_YEARS)
    }
}

impl Rule for ArxivStatusRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "arXiv preprints must be typed as articles and re-checked for a published version"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], ctx: &ExecutionContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (i, record) in records.iter().enumerate() {
            let Some(name) = record.publication_name() else {
                continue;
            };
            if !mentions_arxiv(name) {
                continue;
            }

            match record.kind() {
                EntryKind::Article => {
                    if let Some(year) = record.year() {
                        let year = year.trim();
                        let issue = Issue::new(
                            self.severity_for(year, ctx),
                            IssueKind::ArxivPaper {
                                year: year.to_string(),
                            },
                        );
                        findings.push(Finding::new(i, issue));
                    }
                }
                EntryKind::InProceedings => {
                    findings.push(Finding::new(
                        i,
                        Issue::error(IssueKind::ArxivAsInProceedings),
                    ));
                }
                EntryKind::Book | EntryKind::Other(_) => {}
            }
        }

        findings
    }
}
