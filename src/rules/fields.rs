#![forbid(unsafe_code)]

//! Required and redundant field checks
//!
//! Each checked kind has a fixed set of required fields. Articles may also
//! carry `volume` and `number`, and are warned when those are missing unless
//! the article is an arXiv preprint. Any other field is redundant.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::rule::mentions_arxiv;
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::{EntryKind, RuleId};

pub const ID: &str = "required-fields";

const ARTICLE_REQUIRED: &[&str] = &["title", "author", "pages", "year", "journal"];
const INPROCEEDINGS_REQUIRED: &[&str] = &["title", "author", "pages", "year", "booktitle"];
const ARTICLE_RECOMMENDED: &[&str] = &["volume", "number"];

const ISSUE_TYPES: &[IssueType] = &[
    IssueType::MissingVolumeNumber,
    IssueType::MissingFields,
    IssueType::RedundantFields,
];

/// Checks that entries carry exactly the fields the house style expects
pub struct RequiredFieldsRule {
    id: RuleId,
}

impl RequiredFieldsRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(ID),
        }
    }

    fn check_record(&self, record: &Record) -> Vec<Issue> {
        let (required, recommended) = match record.kind() {
            EntryKind::Article => (ARTICLE_REQUIRED, ARTICLE_RECOMMENDED),
            EntryKind::InProceedings => (INPROCEEDINGS_REQUIRED, &[][..]),
            EntryKind::Book | EntryKind::Other(_) => return Vec::new(),
        };
        let entry_type = record.kind().as_str().to_string();
        let mut issues = Vec::new();

        let is_preprint = record.publication_name().is_some_and(mentions_arxiv);
        if !is_preprint {
            let missing = missing_fields(record, recommended);
            if !missing.is_empty() {
                issues.push(Issue::warning(IssueKind::MissingVolumeNumber {
                    fields: missing,
                }));
            }
        }

        let missing = missing_fields(record, required);
        if !missing.is_empty() {
            issues.push(Issue::error(IssueKind::MissingFields {
                entry_type: entry_type.clone(),
                fields: missing,
            }));
        }

        let redundant: Vec<String> = record
            .fields()
            .keys()
            .filter(|key| !required.contains(key) && !recommended.contains(key))
            .map(str::to_string)
            .collect();
        if !redundant.is_empty() {
            issues.push(Issue::error(IssueKind::RedundantFields {
                entry_type,
                fields: redundant,
            }));
        }

        issues
    }
}

impl Default for RequiredFieldsRule {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_fields(record: &Record, expected: &[&str]) -> Vec<String> {
    expected
        .iter()
        .filter(|name| !record.fields().contains(name))
        .map(|name| name.to_string())
        .collect()
}

impl Rule for RequiredFieldsRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Entries must have every required field and no fields outside the house style"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        records
            .iter()
            .enumerate()
            .flat_map(|(i, record)| {
                self.check_record(record)
                    .into_iter()
                    .map(move |issue| Finding::new(i, issue))
            })
            .collect()
    }
}
