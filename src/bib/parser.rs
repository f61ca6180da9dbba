#![forbid(unsafe_code)]

//! Lenient BibTeX entry parser
//!
//! The parser extracts just enough structure for linting: the entry type,
//! the citation key, the fields and the line the entry starts on. Text it
//! cannot match (stray prose, `@string` macros without a key, broken
//! entries) is skipped rather than reported.
//!
//! An entry starts at `@type{key,` and runs until the next line that begins
//! with `@`, or the end of input. Inside an entry, fields look like
//! `name = {value}`, `name = "value"` or `name = 123`; braced values may nest
//! two levels deep.

use crate::bib::record::{FieldMap, Record};
use crate::error::BibcheckError;
use crate::types::EntryKind;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static ENTRY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@\s*(\w+)\s*\{\s*([^,\s{}]+)\s*,").expect("entry header pattern is valid")
});

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\w+)\s*=\s*(\{(?:[^{}]|\{(?:[^{}]|\{[^{}]*\})*\})*\}|"[^"]*"|\d+),?"#,
    )
    .expect("field pattern is valid")
});

/// Read and parse a bibliography file
///
/// # Errors
///
/// Returns `BibcheckError::InputNotFound` if the path does not exist and
/// `BibcheckError::Io` if it cannot be read as UTF-8 text.
pub fn parse_file(path: &Path) -> Result<Vec<Record>, BibcheckError> {
    if !path.exists() {
        return Err(BibcheckError::InputNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let records = parse_str(&content);
    debug!(
        path = %path.display(),
        records = records.len(),
        "parsed bibliography"
    );
    Ok(records)
}

/// Parse bibliography text into records, in source order
pub fn parse_str(text: &str) -> Vec<Record> {
    let content = normalize(text);
    let line_offsets = compute_line_offsets(&content);

    let mut records = Vec::new();
    let mut pos = 0;

    while let Some(header) = ENTRY_HEADER.captures_at(&content, pos) {
        let Some(whole) = header.get(0) else {
            break;
        };

        let body_start = whole.end();
        let body_end = content[body_start..]
            .find("\n@")
            .map_or(content.len(), |i| body_start + i);

        let kind = EntryKind::from_type_name(&header[1]);
        let fields = parse_fields(&content[body_start..body_end]);
        let line_number = offset_to_line(whole.start(), &line_offsets);

        records.push(Record::new(kind, &header[2], fields, line_number));
        pos = body_end;
    }

    records
}

/// Canonicalize line endings and blank out `%` comment lines
///
/// Both steps keep the number of line breaks, so offsets into the result map
/// to the same line numbers as the original text.
fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with('%') {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_fields(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    for cap in FIELD.captures_iter(body) {
        fields.insert(&cap[1], clean_value(&cap[2]));
    }
    fields
}

/// Flatten a raw value onto one line and drop its outer delimiters
fn clean_value(raw: &str) -> String {
    let value = raw.trim().replace('\n', "");
    let delimited = value.len() >= 2
        && ((value.starts_with('{') && value.ends_with('}'))
            || (value.starts_with('"') && value.ends_with('"')));
    if delimited {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}

/// Byte offset of the start of every line
fn compute_line_offsets(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert a byte offset to a 1-based line number
fn offset_to_line(offset: usize, line_offsets: &[usize]) -> usize {
    line_offsets.partition_point(|&o| o <= offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"@article{smith23,
  title = {Deep {Learning} for {BibTeX}},
  author = "Smith, John and Doe, Jane",
  journal = {Journal of Machine Learning Research},
  year = 2023,
  pages = {1--20}
}

@InProceedings{doe22,
  Title = {A Conference
           Paper},
  booktitle = {Proceedings of the Conference}
}
"#;

    #[test]
    fn test_parses_entries_in_order() {
        let records = parse_str(SAMPLE);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].kind(), &EntryKind::Article);
        assert_eq!(records[0].citation_key(), "smith23");
        assert_eq!(records[0].line_number(), 1);
        assert_eq!(records[0].title(), Some("Deep {Learning} for {BibTeX}"));
        assert_eq!(records[0].author(), Some("Smith, John and Doe, Jane"));
        assert_eq!(records[0].year(), Some("2023"));
        assert_eq!(records[0].pages(), Some("1--20"));

        assert_eq!(records[1].kind(), &EntryKind::InProceedings);
        assert_eq!(records[1].citation_key(), "doe22");
        assert_eq!(records[1].line_number(), 9);
    }

    #[test]
    fn test_field_keys_lowercased_and_values_flattened() {
        let records = parse_str(SAMPLE);
        let keys: Vec<_> = records[1].fields().keys().collect();
        assert_eq!(keys, vec!["title", "booktitle"]);
        assert_eq!(records[1].title(), Some("A Conference           Paper"));
    }

    #[test]
    fn test_field_source_order_preserved() {
        let records = parse_str(SAMPLE);
        let keys: Vec<_> = records[0].fields().keys().collect();
        assert_eq!(keys, vec!["title", "author", "journal", "year", "pages"]);
    }

    #[test]
    fn test_other_kinds_are_retained() {
        let text = "@book{b1,\n title = {A Book}\n}\n@misc{m1,\n title = {Web}\n}\n";
        let records = parse_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind(), &EntryKind::Book);
        assert_eq!(records[1].kind(), &EntryKind::Other("misc".to_string()));
        assert_eq!(records[1].line_number(), 4);
    }

    #[test]
    fn test_comment_lines_are_stripped() {
        let text = "% @article{hidden,\n% title = {No}\n@article{shown,\n title = {Yes}\n}\n";
        let records = parse_str(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].citation_key(), "shown");
        assert_eq!(records[0].line_number(), 3);
    }

    #[test]
    fn test_percent_inside_value_is_kept() {
        let text = "@article{a,\n title = {A 50\\% Speedup}\n}\n";
        let records = parse_str(text);
        assert_eq!(records[0].title(), Some("A 50\\% Speedup"));
    }

    #[test]
    fn test_crlf_line_numbers() {
        let text = "junk\r\n\r\n@article{a,\r\n title = {T}\r\n}\r\n@article{b,\r\n title = {U}\r\n}";
        let records = parse_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line_number(), 3);
        assert_eq!(records[1].line_number(), 6);
        assert_eq!(records[1].title(), Some("U"));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let text = "stray text\n@article{,\n}\n@string{venue = {ICML}}\n@article{ok,\n year = 2020\n}\n";
        let records = parse_str(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].citation_key(), "ok");
        assert_eq!(records[0].line_number(), 5);
    }

    #[test]
    fn test_at_sign_inside_entry_does_not_split() {
        let text = "@article{a,\n note = {mail me @ home},\n title = {T}\n}\n";
        let records = parse_str(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), Some("T"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_str(SAMPLE), parse_str(SAMPLE));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/definitely/not/here.bib"));
        assert!(matches!(result, Err(BibcheckError::InputNotFound(_))));
    }

    #[test]
    fn test_offset_to_line() {
        let offsets = compute_line_offsets("ab\ncd\n\nef");
        assert_eq!(offset_to_line(0, &offsets), 1);
        assert_eq!(offset_to_line(3, &offsets), 2);
        assert_eq!(offset_to_line(6, &offsets), 3);
        assert_eq!(offset_to_line(7, &offsets), 4);
    }
}
