//! Record builders shared by the rule unit tests

use crate::bib::Record;
use crate::issues::Issue;
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::EntryKind;

pub(crate) fn article(key: &str, fields: &[(&str, &str)]) -> Record {
    Record::new(EntryKind::Article, key, fields.iter().copied().collect(), 1)
}

pub(crate) fn paper(key: &str, fields: &[(&str, &str)]) -> Record {
    Record::new(
        EntryKind::InProceedings,
        key,
        fields.iter().copied().collect(),
        1,
    )
}

/// A complete, clean article
pub(crate) fn full_article(key: &str, journal: &str) -> Record {
    article(
        key,
        &[
            ("title", key),
            ("author", "Doe, Jane"),
            ("journal", journal),
            ("year", "2020"),
            ("volume", "1"),
            ("number", "2"),
            ("pages", "1--10"),
        ],
    )
}

/// A complete, clean conference paper
pub(crate) fn full_paper(key: &str, booktitle: &str) -> Record {
    paper(
        key,
        &[
            ("title", key),
            ("author", "Doe, Jane"),
            ("booktitle", booktitle),
            ("year", "2020"),
            ("pages", "1--10"),
        ],
    )
}

pub(crate) fn run(rule: &dyn Rule, records: &[Record]) -> Vec<Finding> {
    run_in_year(rule, records, 2025)
}

pub(crate) fn run_in_year(rule: &dyn Rule, records: &[Record], year: i32) -> Vec<Finding> {
    let refs: Vec<&Record> = records.iter().collect();
    rule.check(&refs, &ExecutionContext::new(year))
}

/// Issues reported for one record, in order
pub(crate) fn issues_for(findings: &[Finding], record: usize) -> Vec<Issue> {
    findings
        .iter()
        .filter(|f| f.record == record)
        .map(|f| f.issue.clone())
        .collect()
}
