#![forbid(unsafe_code)]

//! bibcheck: a style linter for BibTeX bibliographies
//!
//! A `.bib` file is parsed into [`Record`]s, every enabled rule inspects the
//! articles and conference papers among them, and each violation is attached
//! to its record as a severity-tagged [`Issue`]. Reports are rendered as
//! terminal text, JSON Lines or a standalone HTML page.

pub mod bib;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod issues;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{BibcheckError, ConfigError};

// Re-export core domain types for convenient access
pub use bib::{FieldMap, Record, parse_file, parse_str};
pub use issues::{Issue, IssueKind, IssueType, VenuePrefix};
pub use types::{EntryKind, RuleId, Severity};
