#![forbid(unsafe_code)]

//! Title case for journal and booktitle names
//!
//! Every word must start with a capital letter except short function words
//! (articles, prepositions, conjunctions, auxiliary verbs) after the first
//! word. Numbers, ordinals and arXiv identifiers are ignored.

use crate::bib::Record;
use crate::issues::{Issue, IssueKind, IssueType};
use crate::rules::{ExecutionContext, Finding, Rule};
use crate::types::RuleId;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const ID: &str = "venue-capitalization";

/// Words that may stay lowercase after the first word
pub const LOWERCASE_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "as", "at", "by", "from", "in", "into",
    "of", "on", "onto", "to", "with", "is", "are", "was", "were", "am", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "not", "preprint",
];

const ISSUE_TYPES: &[IssueType] = &[IssueType::VenueCapitalization];

static ORDINAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9]+(st|nd|rd|th)$").expect("ordinal word pattern is valid")
});

static ARXIV_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^arxiv(:[0-9]{4}\.[0-9]{4,5})?$").expect("arxiv word pattern is valid")
});

static NUMBER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.,]+$").expect("number word pattern is valid"));

/// Checks that publication names are written in title case
pub struct CapitalizationRule {
    id: RuleId,
    lowercase_words: HashSet<String>,
}

impl CapitalizationRule {
    /// Creates the rule with the built-in word list plus `extra_words`
    pub fn new<I, S>(extra_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lowercase_words = LOWERCASE_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_words.into_iter().map(|w| w.as_ref().to_lowercase()))
            .collect();
        Self {
            id: RuleId::builtin(ID),
            lowercase_words,
        }
    }

    /// Words of `name` that break title case, in order
    fn improperly_capitalized<'a>(&self, name: &'a str) -> Vec<&'a str> {
        let mut violations = Vec::new();

        for (i, word) in name.split_whitespace().enumerate() {
            if ARXIV_WORD.is_match(word) || ORDINAL_WORD.is_match(word) || NUMBER_WORD.is_match(word)
            {
                continue;
            }

            let Some(first_letter) = word.chars().find(|c| c.is_alphabetic()) else {
                continue;
            };
            if first_letter.is_uppercase() {
                continue;
            }

            if i == 0 || !self.lowercase_words.contains(&word.to_lowercase()) {
                violations.push(word);
            }
        }

        violations
    }
}

impl Default for CapitalizationRule {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl Rule for CapitalizationRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Journal and booktitle names must be capitalized as titles"
    }

    fn issue_types(&self) -> &[IssueType] {
        ISSUE_TYPES
    }

    fn check(&self, records: &[&Record], _ctx: &ExecutionContext) -> Vec<Finding> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let words = self.improperly_capitalized(record.publication_name()?);
                if words.is_empty() {
                    return None;
                }
                let words = words.into_iter().map(str::to_string).collect();
                Some(Finding::new(
                    i,
                    Issue::warning(IssueKind::VenueCapitalization { words }),
                ))
            })
            .collect()
    }
}
