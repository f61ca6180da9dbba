#![forbid(unsafe_code)]

//! Abbreviated journal and booktitle names
//!
//! A token is treated as an abbreviation when it contains a run of two or
//! more uppercase ASCII letters, e.g. `ICML`, `NeurIPS` or `CVPRW`. Publisher
//! acronyms that are part of official names are allowed.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::RuleId;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const ID: &str = "venue-abbreviation";

/// Acronyms allowed unless the configuration replaces the list
pub const DEFAULT_ALLOWED: &[&str] = &["ACM", "IEEE", "SIAM", "MIT"];

const ISSUE_TYPES: &[IssueType] = &[IssueType::VenueAbbreviation];

static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[A-Z]{2,}|[A-Za-z]*[A-Z]{2,}[A-Za-z]*)\b")
        .expect("abbreviation pattern is valid")
});

/// Flags publication names that use abbreviations instead of full names
pub struct AbbreviationRule {
    id: RuleId,
    allowed: HashSet<String>,
}

impl AbbreviationRule {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: RuleId::builtin(ID),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    fn abbreviations_in<'a>(&self, name: &'a str) -> Vec<&'a str> {
        ABBREVIATION
            .find_iter(name)
            .map(|m| m.as_str())
            .filter(|token| !self.allowed.contains(*token))
            .collect()
    }
}

impl Default for AbbreviationRule {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED.iter().copied())
    }
}

impl Rule for AbbreviationRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Journal and booktitle names must be written out in full"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let found = self.abbreviations_in(record.publication_name()?);
                if found.is_empty() {
                    return None;
                }
                let abbreviations = found.into_iter().map(str::to_string).collect();
                Some(Finding::new(
                    i,
                    Issue::warning(IssueKind::VenueAbbreviation { abbreviations }),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::*;

    #[test]
    fn test_detects_acronyms_and_mixed_case() {
        let rule = AbbreviationRule::default();
        assert_eq!(
            rule.abbreviations_in("Proceedings of ICML and NeurIPS"),
            vec!["ICML", "NeurIPS"]
        );
        assert_eq!(rule.abbreviations_in("arXiv preprint"), Vec::<&str>::new());
        assert_eq!(rule.abbreviations_in("Journal of Research"), Vec::<&str>::new());
    }

    #[test]
    fn test_default_allow_list() {
        let rule = AbbreviationRule::default();
        assert!(
            rule.abbreviations_in("IEEE Transactions on Pattern Analysis")
                .is_empty()
        );
        assert!(rule.abbreviations_in("Communications of the ACM").is_empty());
        assert!(rule.abbreviations_in("SIAM Review").is_empty());
    }

    #[test]
    fn test_custom_allow_list_replaces_default() {
        let rule = AbbreviationRule::new(["AAAI"]);
        assert!(rule.abbreviations_in("AAAI Conference").is_empty());
        assert_eq!(rule.abbreviations_in("IEEE Access"), vec!["IEEE"]);
    }

    #[test]
    fn test_single_warning_lists_all_tokens() {
        let records = vec![
            paper("p", &[("booktitle", "Proceedings of CVPR Workshops (CVPRW)")]),
            article("a", &[("journal", "Nature")]),
        ];
        let findings = run(&AbbreviationRule::default(), &records);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].issue,
            Issue::warning(IssueKind::VenueAbbreviation {
                abbreviations: vec!["CVPR".to_string(), "CVPRW".to_string()]
            })
        );
    }
}
