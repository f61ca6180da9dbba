#![forbid(unsafe_code)]

//! Duplicate entry detection
//!
//! Records are grouped by exact citation key and, separately, by lower-cased
//! title. Every member of a group with more than one record gets the same
//! error, so a record can be flagged for both.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::RuleId;
use std::collections::HashMap;

pub const ID: &str = "duplicates";

const ISSUE_TYPES: &[IssueType] = &[IssueType::DuplicateCitationKey, IssueType::DuplicateTitle];

/// Flags records sharing a citation key or a title
pub struct DuplicatesRule {
    id: RuleId,
}

impl DuplicatesRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(ID),
        }
    }
}

impl Default for DuplicatesRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups record indices by key, keeping groups in first-occurrence order
fn group_by_key(keys: impl Iterator<Item = (usize, String)>) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, key) in keys {
        match positions.get(&key) {
            Some(&pos) => groups[pos].1.push(index),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![index]));
            }
        }
    }

    groups.retain(|(_, members)| members.len() > 1);
    groups
}

impl Rule for DuplicatesRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Citation keys and titles must be unique within the file"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        let by_key = group_by_key(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i, r.citation_key().to_string())),
        );
        for (citation_key, members) in by_key {
            let issue = Issue::error(IssueKind::DuplicateCitationKey { citation_key });
            findings.extend(members.into_iter().map(|i| Finding::new(i, issue.clone())));
        }

        let by_title = group_by_key(
            records
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.title().map(|t| (i, t.to_lowercase()))),
        );
        for (title, members) in by_title {
            let issue = Issue::error(IssueKind::DuplicateTitle { title });
            findings.extend(members.into_iter().map(|i| Finding::new(i, issue.clone())));
        }

        findings
    }
}
