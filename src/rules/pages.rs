#![forbid(unsafe_code)]

//! Page range format check
//!
//! The house format is `start--end`. Hyphens, en dashes and em dashes are
//! all accepted as separators, singly or doubled.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::RuleId;
use regex::Regex;
use std::sync::LazyLock;

pub const ID: &str = "page-range";

const ISSUE_TYPES: &[IssueType] = &[
    IssueType::BiggerBeginPage,
    IssueType::OnlyOnePage,
    IssueType::WrongPageFormat,
];

static PAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[-\x{2013}\x{2014}]{1,2}([0-9]+)$").expect("page range pattern is valid")
});

static SINGLE_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("single page pattern is valid"));

/// Validates the `pages` field when present
pub struct PageRangeRule {
    id: RuleId,
}

impl PageRangeRule {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(ID),
        }
    }
}

impl Default for PageRangeRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a `pages` value; `None` means it is well formed or empty
fn analyze_pages(raw: &str) -> Option<IssueKind> {
    let pages = raw.trim();
    if pages.is_empty() {
        return None;
    }

    if let Some(caps) = PAGE_RANGE.captures(pages) {
        return match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
            (Ok(start), Ok(end)) if start > end => Some(IssueKind::BiggerBeginPage { start, end }),
            (Ok(_), Ok(_)) => None,
            _ => Some(IssueKind::WrongPageFormat {
                pages: pages.to_string(),
            }),
        };
    }

    if SINGLE_PAGE.is_match(pages) {
        return Some(match pages.parse::<u64>() {
            Ok(page) => IssueKind::OnlyOnePage { page },
            Err(_) => IssueKind::WrongPageFormat {
                pages: pages.to_string(),
            },
        });
    }

    Some(IssueKind::WrongPageFormat {
        pages: pages.to_string(),
    })
}

impl Rule for PageRangeRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Page ranges must look like 'start--end' with start <= end"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let kind = analyze_pages(record.pages()?)?;
                Some(Finding::new(i, Issue::error(kind)))
            })
            .collect()
    }
}
