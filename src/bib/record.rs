#![forbid(unsafe_code)]

//! Parsed bibliographic records
//!
//! A [`Record`] is one `@type{key, ...}` entry from the source file together
//! with the issues the rule pipeline attached to it.

use crate::issues::Issue;
use crate::types::{EntryKind, Severity};

/// Field names in source order
///
/// Keys are stored lower-cased. Inserting an existing key replaces its value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, lower-casing the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Field names in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// One bibliographic entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: EntryKind,
    citation_key: String,
    fields: FieldMap,
    line_number: usize,
    issues: Vec<Issue>,
}

impl Record {
    /// Creates a record with an empty issue list
    pub fn new(
        kind: EntryKind,
        citation_key: impl Into<String>,
        fields: FieldMap,
        line_number: usize,
    ) -> Self {
        Self {
            kind,
            citation_key: citation_key.into(),
            fields,
            line_number,
            issues: Vec::new(),
        }
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn citation_key(&self) -> &str {
        &self.citation_key
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// 1-based line of the entry's opening `@`
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Issues in detection order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.field("author")
    }

    pub fn year(&self) -> Option<&str> {
        self.field("year")
    }

    pub fn pages(&self) -> Option<&str> {
        self.field("pages")
    }

    /// Name of the field holding the venue: `journal` or `booktitle`
    pub fn publication_field_label(&self) -> Option<&'static str> {
        match self.kind {
            EntryKind::Article => Some("journal"),
            EntryKind::InProceedings => Some("booktitle"),
            EntryKind::Book | EntryKind::Other(_) => None,
        }
    }

    /// The venue this work was published in
    pub fn publication_name(&self) -> Option<&str> {
        self.publication_field_label()
            .and_then(|label| self.field(label))
    }

    /// Appends an issue. Issues are never removed.
    pub(crate) fn push_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
