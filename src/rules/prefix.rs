#![forbid(unsafe_code)]

//! "Proceedings of" / "Advanced in" consistency
//!
//! Conference booktitles in one bibliography should open the same way. The
//! expected opening is whichever of the two phrases is more common across the
//! checked records, with ties going to "Proceedings of".

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType, VenuePrefix};
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::{EntryKind, RuleId};
use tracing::debug;

pub const ID: &str = "proceedings-prefix";

const ISSUE_TYPES: &[IssueType] = &[
    IssueType::ArticleWithProceedingsPrefix,
    IssueType::InconsistentProceedingsPrefix,
];

/// Enforces a single booktitle opening and keeps it out of journal names
pub struct ProceedingsPrefixRule {
    id: RuleId,
}

impl ProceedingsPrefixRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(ID),
        }
    }
}

impl Default for ProceedingsPrefixRule {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PrefixCounts {
    proceedings: usize,
    advanced: usize,
}

impl PrefixCounts {
    fn tally(records: &[&Record]) -> Self {
        let mut counts = Self::default();
        for prefix in records
            .iter()
            .filter_map(|r| r.publication_name())
            .filter_map(VenuePrefix::of)
        {
            match prefix {
                VenuePrefix::ProceedingsOf => counts.proceedings += 1,
                VenuePrefix::AdvancedIn => counts.advanced += 1,
            }
        }
        counts
    }

    fn is_empty(&self) -> bool {
        self.proceedings == 0 && self.advanced == 0
    }

    fn expected(&self) -> VenuePrefix {
        if self.advanced > self.proceedings {
            VenuePrefix::AdvancedIn
        } else {
            VenuePrefix::ProceedingsOf
        }
    }
}

impl Rule for ProceedingsPrefixRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Booktitles must consistently start with the majority of 'Proceedings of' or 'Advanced in'"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        let counts = PrefixCounts::tally(records);
        let expected = counts.expected();
        debug!(
            proceedings = counts.proceedings,
            advanced = counts.advanced,
            %expected,
            "Counted booktitle prefixes"
        );

        let mut findings = Vec::new();
        for (i, record) in records.iter().enumerate() {
            let prefix = record.publication_name().and_then(VenuePrefix::of);

            match record.kind() {
                EntryKind::Article if prefix.is_some() => {
                    findings.push(Finding::new(
                        i,
                        Issue::error(IssueKind::ArticleWithProceedingsPrefix),
                    ));
                }
                EntryKind::InProceedings if !counts.is_empty() && prefix != Some(expected) => {
                    findings.push(Finding::new(
                        i,
                        Issue::warning(IssueKind::InconsistentProceedingsPrefix {
                            expected,
                            num_proceedings: counts.proceedings,
                            num_advanced: counts.advanced,
                        }),
                    ));
                }
                _ => {}
            }
        }

        findings
    }
}
