#![forbid(unsafe_code)]

//! Core domain types for bibcheck
//!
//! This module defines the small value types shared by the parser, the rule
//! pipeline and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity levels
///
/// Rules only ever emit `Error` and `Warning`. `Info` is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Returns the lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a bibliographic entry
///
/// Only articles and conference papers are checked; everything else is kept so
/// the record sequence mirrors the source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Article,
    InProceedings,
    Book,
    /// Any other entry type, holding the lower-cased type name
    Other(String),
}

impl EntryKind {
    /// Maps a raw `@type` name (any case) to an entry kind
    pub fn from_type_name(name: &str) -> Self {
        let name = name.to_lowercase();
        match name.as_str() {
            "article" => EntryKind::Article,
            "inproceedings" => EntryKind::InProceedings,
            "book" => EntryKind::Book,
            _ => EntryKind::Other(name),
        }
    }

    /// Returns the BibTeX type name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Article => "article",
            EntryKind::InProceedings => "inproceedings",
            EntryKind::Book => "book",
            EntryKind::Other(name) => name,
        }
    }

    /// Whether records of this kind go through the rule pipeline
    pub fn is_checked(&self) -> bool {
        match self {
            EntryKind::Article | EntryKind::InProceedings => true,
            EntryKind::Book | EntryKind::Other(_) => false,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Creates the ID of a built-in rule from a known-valid literal
    pub(crate) fn builtin(id: &'static str) -> Self {
        debug_assert!(RuleId::new(id).is_some());
        RuleId(id.to_string())
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value).ok_or_else(|| "Invalid rule ID".to_string())
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}
