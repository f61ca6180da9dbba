#![forbid(unsafe_code)]

//! Built-in rules compiled into the binary
//!
//! Rules run in the order listed here. The order is observable: it decides
//! the order of issues attached to each record.

use crate::config::Config;
use crate::rules::{
    AbbreviationRule, ArxivStatusRule, CapitalizationRule, DuplicatesRule, PageRangeRule,
    ProceedingsPrefixRule, RequiredFieldsRule, Rule, YearInVenueRule, abbreviation, arxiv,
    capitalization, duplicates, fields, pages, prefix, year,
};

/// IDs of all built-in rules, in execution order
pub const BUILTIN_RULE_IDS: &[&str] = &[
    fields::ID,
    duplicates::ID,
    pages::ID,
    year::ID,
    arxiv::ID,
    capitalization::ID,
    prefix::ID,
    abbreviation::ID,
];

/// Instantiate every built-in rule with its settings from `config`
pub fn builtin_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredFieldsRule::new()),
        Box::new(DuplicatesRule::new()),
        Box::new(PageRangeRule::new()),
        Box::new(YearInVenueRule::new()),
        Box::new(ArxivStatusRule::new(config.arxiv.recent_years)),
        Box::new(CapitalizationRule::new(
            &config.capitalization.lowercase_words,
        )),
        Box::new(ProceedingsPrefixRule::new()),
        Box::new(AbbreviationRule::new(
            config.abbreviations.allowed.iter().cloned(),
        )),
    ]
}
