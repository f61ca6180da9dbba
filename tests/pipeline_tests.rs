//! End-to-end tests of parsing and rule execution through the public API
//!
//! The fixture bibliography exercises most rules at least once; expectations
//! are computed against a fixed reference year so they do not drift.

#[macro_use]
mod common;

use bibcheck::config::Config;
use bibcheck::engine::{ExecutionEngine, ExecutionResult};
use bibcheck::rules::{ExecutionContext, RuleRegistry};
use bibcheck::{EntryKind, IssueType, Record, Severity, parse_file, parse_str};
use common::{REFERENCE_YEAR, fixture_path};

fn check_with(records: Vec<Record>, config: &Config) -> ExecutionResult {
    ExecutionEngine::new(RuleRegistry::from_config(config))
        .execute(records, &ExecutionContext::new(REFERENCE_YEAR))
}

fn check(records: Vec<Record>) -> ExecutionResult {
    check_with(records, &Config::default())
}

fn check_text(text: &str) -> ExecutionResult {
    check(parse_str(text))
}

fn issue_types(record: &Record) -> Vec<IssueType> {
    record.issues().iter().map(|i| i.issue_type()).collect()
}

fn sample() -> ExecutionResult {
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));
    check(records)
}

#[test]
fn test_sample_parses_every_entry_in_order() {
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));

    let keys: Vec<&str> = records.iter().map(|r| r.citation_key()).collect();
    assert_eq!(
        keys,
        vec!["smith23", "doe21", "lee22", "smith23", "knuth84", "wang24"]
    );

    let lines: Vec<usize> = records.iter().map(|r| r.line_number()).collect();
    assert_eq!(lines, vec![4, 14, 22, 30, 37, 43]);

    assert_eq!(records[4].kind(), &EntryKind::Book);
    assert!(records.iter().all(|r| r.issues().is_empty()));
}

#[test]
fn test_commented_entry_is_ignored() {
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));
    assert!(records.iter().all(|r| r.citation_key() != "commented-out"));
}

#[test]
fn test_sample_issues_per_record() {
    let result = sample();
    let per_record: Vec<Vec<IssueType>> = result.records.iter().map(issue_types).collect();

    assert_eq!(
        per_record,
        vec![
            vec![IssueType::DuplicateCitationKey, IssueType::DuplicateTitle],
            vec![IssueType::BiggerBeginPage],
            vec![
                IssueType::OnlyOnePage,
                IssueType::InconsistentProceedingsPrefix
            ],
            vec![
                IssueType::MissingFields,
                IssueType::DuplicateCitationKey,
                IssueType::ArxivPaper
            ],
            vec![],
            vec![
                IssueType::RedundantFields,
                IssueType::DuplicateTitle,
                IssueType::VenueContainsYear,
                IssueType::InconsistentProceedingsPrefix,
                IssueType::VenueAbbreviation
            ],
        ]
    );
}

#[test]
fn test_sample_summary_counts() {
    let result = sample();

    assert_eq!(result.records.len(), 6);
    assert_eq!(result.records_checked, 5);
    assert_eq!(result.rules_executed, 8);
    assert_eq!(result.count_severity(Severity::Error), 10);
    assert_eq!(result.count_severity(Severity::Warning), 3);
    assert_eq!(result.records_with_issues().count(), 5);
}

#[test]
fn test_checking_preserves_record_sequence() {
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));
    let before: Vec<(String, usize)> = records
        .iter()
        .map(|r| (r.citation_key().to_string(), r.line_number()))
        .collect();

    let result = check(records);
    let after: Vec<(String, usize)> = result
        .records
        .iter()
        .map(|r| (r.citation_key().to_string(), r.line_number()))
        .collect();

    assert_eq!(before, after);
}

#[test]
fn test_parsing_is_deterministic() {
    let text = std::fs::read_to_string(fixture_path("sample.bib")).unwrap();
    assert_eq!(parse_str(&text), parse_str(&text));
}

#[test]
fn test_clean_fixture_has_no_issues() {
    let records = assert_ok!(parse_file(&fixture_path("clean.bib")));
    let result = check(records);

    assert_eq!(result.records_checked, 1);
    assert!(result.records[0].issues().is_empty());
}

#[test]
fn test_page_range_examples() {
    let entry = |pages: &str| {
        format!(
            "@article{{k,\n  title = {{T}},\n  author = {{A}},\n  journal = {{Journal}},\n  \
             year = 2020,\n  volume = 1,\n  number = 2,\n  pages = {{{}}},\n}}\n",
            pages
        )
    };

    for (pages, expected) in [
        ("1--20", vec![]),
        ("12", vec![IssueType::OnlyOnePage]),
        ("20--10", vec![IssueType::BiggerBeginPage]),
        ("1-20", vec![]),
        ("e1--e20", vec![IssueType::WrongPageFormat]),
    ] {
        let result = check_text(&entry(pages));
        assert_eq!(issue_types(&result.records[0]), expected, "pages = {pages}");
    }
}

#[test]
fn test_arxiv_preprint_exempt_from_volume_and_number() {
    let result = check_text(
        "@article{p,\n  title = {T},\n  author = {A},\n  \
         journal = {arXiv preprint arXiv:2406.00001},\n  year = 2024,\n  pages = {1--2},\n}\n",
    );

    let record = &result.records[0];
    assert_eq!(issue_types(record), vec![IssueType::ArxivPaper]);
    assert_eq!(record.issues()[0].severity(), Severity::Warning);
}

#[test]
fn test_arxiv_inproceedings_is_mistyped() {
    let result = check_text(
        "@inproceedings{p,\n  title = {T},\n  author = {A},\n  \
         booktitle = {arXiv},\n  year = 2024,\n  pages = {1--2},\n}\n",
    );

    assert_eq!(
        issue_types(&result.records[0]),
        vec![IssueType::ArxivAsInProceedings]
    );
}

#[test]
fn test_article_with_proceedings_prefix() {
    let result = check_text(
        "@article{p,\n  title = {T},\n  author = {A},\n  \
         journal = {Proceedings of the Royal Society},\n  year = 2020,\n  volume = 1,\n  \
         number = 2,\n  pages = {1--2},\n}\n",
    );

    let record = &result.records[0];
    assert_eq!(
        issue_types(record),
        vec![IssueType::ArticleWithProceedingsPrefix]
    );
    assert_eq!(record.issues()[0].severity(), Severity::Error);
}

#[test]
fn test_disabled_rules_do_not_report() {
    let config = assert_ok!(Config::load(fixture_path(
        "config/disable_duplicates.toml"
    )));
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));
    let result = check_with(records, &config);

    assert_eq!(result.rules_executed, 6);
    let reported: Vec<IssueType> = result
        .records
        .iter()
        .flat_map(issue_types)
        .collect();
    assert!(!reported.contains(&IssueType::DuplicateCitationKey));
    assert!(!reported.contains(&IssueType::DuplicateTitle));
    assert!(!reported.contains(&IssueType::VenueAbbreviation));
    assert!(reported.contains(&IssueType::BiggerBeginPage));
}

#[test]
fn test_configured_abbreviation_is_allowed() {
    let config = assert_ok!(Config::parse("[abbreviations]\nallowed = [\"ICML\"]\n"));
    let records = assert_ok!(parse_file(&fixture_path("sample.bib")));
    let result = check_with(records, &config);

    let wang = assert_some!(result.records.iter().find(|r| r.citation_key() == "wang24"));
    assert!(!issue_types(wang).contains(&IssueType::VenueAbbreviation));
}

#[test]
fn test_unchecked_kinds_never_get_issues() {
    let result = check_text(
        "@misc{m,\n  title = {Homepage 2024},\n  howpublished = {web},\n}\n\
         @book{b,\n  title = {A Book},\n}\n",
    );

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records_checked, 0);
    assert!(result.records.iter().all(|r| r.issues().is_empty()));
}

#[test]
fn test_configured_lowercase_words_extend_capitalization() {
    let text = "@inproceedings{p,\n  title = {T},\n  author = {A},\n  \
                booktitle = {Learning on Graphs and trees},\n  year = 2020,\n  \
                pages = {1--2},\n}\n";

    let result = check_text(text);
    let issues = result.records[0].issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].issue_type(), IssueType::VenueCapitalization);
    assert_eq!(
        issues[0].message(),
        "The journal/conference name is not correctly capitalized: trees."
    );

    let config = assert_ok!(Config::parse(
        "[capitalization]\nlowercase_words = [\"trees\"]\n"
    ));
    let result = check_with(parse_str(text), &config);
    assert!(result.records[0].issues().is_empty());
}
