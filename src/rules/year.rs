#![forbid(unsafe_code)]

//! Years and ordinals inside journal or booktitle names
//!
//! The year of a publication belongs in the `year` field only. arXiv venue
//! names legitimately embed identifiers and are skipped.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::rule::mentions_arxiv;
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::RuleId;
use regex::Regex;
use std::sync::LazyLock;

pub const ID: &str = "year-in-venue";

const ISSUE_TYPES: &[IssueType] = &[IssueType::VenueContainsYear, IssueType::VenueContainsOrdinal];

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[0-9]{1,4}(st|nd|rd|th)\b").expect("ordinal pattern is valid")
});

/// Flags publication names that contain a year or an edition ordinal
pub struct YearInVenueRule {
    id: RuleId,
}

impl YearInVenueRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(ID),
        }
    }
}

impl Default for YearInVenueRule {
    fn default() -> Self {
        Self::new()
    }
}

/// First 19xx/20xx number that is not part of a longer digit run
fn find_year(name: &str) -> Option<&str> {
    DIGIT_RUN
        .find_iter(name)
        .map(|m| m.as_str())
        .find(|run| run.len() == 4 && (run.starts_with("19") || run.starts_with("20")))
}

fn find_ordinal(name: &str) -> Option<&str> {
    ORDINAL.find(name).map(|m| m.as_str())
}

impl Rule for YearInVenueRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Journal and booktitle names must not contain years or ordinal numbers"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (i, record) in records.iter().enumerate() {
            let (Some(field), Some(name)) =
                (record.publication_field_label(), record.publication_name())
            else {
                continue;
            };
            if mentions_arxiv(name) {
                continue;
            }

            if let Some(year) = find_year(name) {
                findings.push(Finding::new(
                    i,
                    Issue::error(IssueKind::VenueContainsYear {
                        field,
                        year: year.to_string(),
                    }),
                ));
            }
            if let Some(ordinal) = find_ordinal(name) {
                findings.push(Finding::new(
                    i,
                    Issue::warning(IssueKind::VenueContainsOrdinal {
                        field,
                        ordinal: ordinal.to_string(),
                    }),
                ));
            }
        }

        findings
    }
}
