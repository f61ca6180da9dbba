#![forbid(unsafe_code)]

//! Issue taxonomy
//!
//! Every style violation the rule pipeline can detect is one [`IssueKind`]
//! variant carrying the data its message needs. An [`Issue`] pairs a kind
//! with a [`Severity`]. [`IssueType`] is the fieldless mirror of `IssueKind`
//! used for stable tags and legends in reports.

use crate::types::Severity;
use std::fmt;

/// Stable, fieldless identifier for each issue variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueType {
    MissingFields,
    MissingVolumeNumber,
    RedundantFields,
    DuplicateCitationKey,
    DuplicateTitle,
    BiggerBeginPage,
    OnlyOnePage,
    WrongPageFormat,
    VenueContainsYear,
    VenueContainsOrdinal,
    ArxivPaper,
    ArxivAsInProceedings,
    VenueCapitalization,
    ArticleWithProceedingsPrefix,
    InconsistentProceedingsPrefix,
    VenueAbbreviation,
}

impl IssueType {
    /// All issue types in taxonomy order
    pub const ALL: [IssueType; 16] = [
        IssueType::MissingFields,
        IssueType::MissingVolumeNumber,
        IssueType::RedundantFields,
        IssueType::DuplicateCitationKey,
        IssueType::DuplicateTitle,
        IssueType::BiggerBeginPage,
        IssueType::OnlyOnePage,
        IssueType::WrongPageFormat,
        IssueType::VenueContainsYear,
        IssueType::VenueContainsOrdinal,
        IssueType::ArxivPaper,
        IssueType::ArxivAsInProceedings,
        IssueType::VenueCapitalization,
        IssueType::ArticleWithProceedingsPrefix,
        IssueType::InconsistentProceedingsPrefix,
        IssueType::VenueAbbreviation,
    ];

    /// Kebab-case tag used for filtering in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::MissingFields => "missing-fields",
            IssueType::MissingVolumeNumber => "missing-volume-number",
            IssueType::RedundantFields => "redundant-fields",
            IssueType::DuplicateCitationKey => "duplicate-citation-key",
            IssueType::DuplicateTitle => "duplicate-title",
            IssueType::BiggerBeginPage => "bigger-begin-page",
            IssueType::OnlyOnePage => "only-one-page",
            IssueType::WrongPageFormat => "wrong-page-format",
            IssueType::VenueContainsYear => "venue-contains-year",
            IssueType::VenueContainsOrdinal => "venue-contains-ordinal",
            IssueType::ArxivPaper => "arxiv-paper",
            IssueType::ArxivAsInProceedings => "arxiv-as-inproceedings",
            IssueType::VenueCapitalization => "venue-capitalization",
            IssueType::ArticleWithProceedingsPrefix => "article-with-proceedings-prefix",
            IssueType::InconsistentProceedingsPrefix => "inconsistent-proceedings-prefix",
            IssueType::VenueAbbreviation => "venue-abbreviation",
        }
    }

    /// Short label used to group issues in reports
    pub fn legend(&self) -> &'static str {
        match self {
            IssueType::MissingFields => "Not included keys",
            IssueType::MissingVolumeNumber => "Missing volume or number",
            IssueType::RedundantFields => "Include redundant keys",
            IssueType::DuplicateCitationKey => "Multiple entry key",
            IssueType::DuplicateTitle => "Multiple paper title",
            IssueType::BiggerBeginPage => "Bigger begin page",
            IssueType::OnlyOnePage => "Only one page",
            IssueType::WrongPageFormat => "Wrong page format",
            IssueType::VenueContainsYear => "Title contains year",
            IssueType::VenueContainsOrdinal => "Title contains ordinal number",
            IssueType::ArxivPaper => "Arxiv papers",
            IssueType::ArxivAsInProceedings => "Arxiv as conf paper",
            IssueType::VenueCapitalization => "Title not capitalized",
            IssueType::ArticleWithProceedingsPrefix => "Article has \"Proceedings of\"",
            IssueType::InconsistentProceedingsPrefix => {
                "Inconsistency of \"Proceedings of\" and \"Advanced in\""
            }
            IssueType::VenueAbbreviation => "Journal/Booktitle contains abbreviations",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conventional openings of a conference booktitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenuePrefix {
    ProceedingsOf,
    AdvancedIn,
}

impl VenuePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenuePrefix::ProceedingsOf => "Proceedings of",
            VenuePrefix::AdvancedIn => "Advanced in",
        }
    }

    pub fn other(&self) -> VenuePrefix {
        match self {
            VenuePrefix::ProceedingsOf => VenuePrefix::AdvancedIn,
            VenuePrefix::AdvancedIn => VenuePrefix::ProceedingsOf,
        }
    }

    /// Case-insensitive prefix test on the trimmed name
    pub fn of(name: &str) -> Option<VenuePrefix> {
        let lower = name.trim().to_lowercase();
        if lower.starts_with("proceedings of") {
            Some(VenuePrefix::ProceedingsOf)
        } else if lower.starts_with("advanced in") {
            Some(VenuePrefix::AdvancedIn)
        } else {
            None
        }
    }
}

impl fmt::Display for VenuePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data carried by each kind of style violation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Required fields absent from the entry
    MissingFields {
        entry_type: String,
        fields: Vec<String>,
    },
    /// `volume` and/or `number` absent from a non-arXiv article
    MissingVolumeNumber { fields: Vec<String> },
    /// Fields outside the allowed set, in source order
    RedundantFields {
        entry_type: String,
        fields: Vec<String>,
    },
    DuplicateCitationKey { citation_key: String },
    /// Carries the lower-cased title shared by the group
    DuplicateTitle { title: String },
    BiggerBeginPage { start: u64, end: u64 },
    OnlyOnePage { page: u64 },
    WrongPageFormat { pages: String },
    VenueContainsYear { field: &'static str, year: String },
    VenueContainsOrdinal { field: &'static str, ordinal: String },
    /// An article still typed as an arXiv preprint
    ArxivPaper { year: String },
    ArxivAsInProceedings,
    VenueCapitalization { words: Vec<String> },
    ArticleWithProceedingsPrefix,
    InconsistentProceedingsPrefix {
        expected: VenuePrefix,
        num_proceedings: usize,
        num_advanced: usize,
    },
    VenueAbbreviation { abbreviations: Vec<String> },
}

impl IssueKind {
    pub fn issue_type(&self) -> IssueType {
        match self {
            IssueKind::MissingFields { .. } => IssueType::MissingFields,
            IssueKind::MissingVolumeNumber { .. } => IssueType::MissingVolumeNumber,
            IssueKind::RedundantFields { .. } => IssueType::RedundantFields,
            IssueKind::DuplicateCitationKey { .. } => IssueType::DuplicateCitationKey,
            IssueKind::DuplicateTitle { .. } => IssueType::DuplicateTitle,
            IssueKind::BiggerBeginPage { .. } => IssueType::BiggerBeginPage,
            IssueKind::OnlyOnePage { .. } => IssueType::OnlyOnePage,
            IssueKind::WrongPageFormat { .. } => IssueType::WrongPageFormat,
            IssueKind::VenueContainsYear { .. } => IssueType::VenueContainsYear,
            IssueKind::VenueContainsOrdinal { .. } => IssueType::VenueContainsOrdinal,
            IssueKind::ArxivPaper { .. } => IssueType::ArxivPaper,
            IssueKind::ArxivAsInProceedings => IssueType::ArxivAsInProceedings,
            IssueKind::VenueCapitalization { .. } => IssueType::VenueCapitalization,
            IssueKind::ArticleWithProceedingsPrefix => IssueType::ArticleWithProceedingsPrefix,
            IssueKind::InconsistentProceedingsPrefix { .. } => {
                IssueType::InconsistentProceedingsPrefix
            }
            IssueKind::VenueAbbreviation { .. } => IssueType::VenueAbbreviation,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::MissingFields { entry_type, fields } => write!(
                f,
                "This {} paper does not have fields: {}.",
                entry_type,
                fields.join(", ")
            ),
            IssueKind::MissingVolumeNumber { fields } => write!(
                f,
                "This article paper does not have the recommended fields: {}.",
                fields.join(", ")
            ),
            IssueKind::RedundantFields { entry_type, fields } => write!(
                f,
                "This {} paper has redundant fields: {}.",
                entry_type,
                fields.join(", ")
            ),
            IssueKind::DuplicateCitationKey { citation_key } => write!(
                f,
                "Multiple papers have the same citation key '{}'.",
                citation_key
            ),
            IssueKind::DuplicateTitle { title } => {
                write!(f, "Multiple papers have the same title '{}'.", title)
            }
            IssueKind::BiggerBeginPage { start, end } => write!(
                f,
                "The begin page '{}' is bigger than the end page '{}'.",
                start, end
            ),
            IssueKind::OnlyOnePage { page } => write!(
                f,
                "The page number contains only a begin page '{}' without an end page.",
                page
            ),
            IssueKind::WrongPageFormat { pages } => write!(
                f,
                "Unrecognized page format: '{}', should be like '1--20'.",
                pages
            ),
            IssueKind::VenueContainsYear { field, year } => write!(
                f,
                "Publication name at key '{}' contains year number '{}'. \
                 Year number should only appear in the 'year' field.",
                field, year
            ),
            IssueKind::VenueContainsOrdinal { field, ordinal } => write!(
                f,
                "Publication name at key '{}' contains ordinal number '{}'.",
                field, ordinal
            ),
            IssueKind::ArxivPaper { year } => write!(
                f,
                "This arXiv preprint is from {}. Check whether it has since been \
                 published in a journal or conference.",
                year
            ),
            IssueKind::ArxivAsInProceedings => {
                f.write_str("arXiv papers should use '@article', rather than '@inproceedings'.")
            }
            IssueKind::VenueCapitalization { words } => write!(
                f,
                "The journal/conference name is not correctly capitalized: {}.",
                words.join(", ")
            ),
            IssueKind::ArticleWithProceedingsPrefix => f.write_str(
                "The journal begins with 'Proceedings of' or 'Advanced in'. You may change \
                 '@article' to '@inproceedings' and adjust the fields of this entry.",
            ),
            IssueKind::InconsistentProceedingsPrefix {
                expected,
                num_proceedings,
                num_advanced,
            } => {
                let (num_expected, num_other) = match expected {
                    VenuePrefix::ProceedingsOf => (num_proceedings, num_advanced),
                    VenuePrefix::AdvancedIn => (num_advanced, num_proceedings),
                };
                write!(
                    f,
                    "The booktitle should start with '{}' ({} papers start with '{}' and {} papers start with '{}').",
                    expected,
                    num_expected,
                    expected,
                    num_other,
                    expected.other()
                )
            }
            IssueKind::VenueAbbreviation { abbreviations } => write!(
                f,
                "The journal/conference name contains abbreviations: {}.",
                abbreviations.join(", ")
            ),
        }
    }
}

/// A severity-tagged style violation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    severity: Severity,
    kind: IssueKind,
}

impl Issue {
    pub fn new(severity: Severity, kind: IssueKind) -> Self {
        Self { severity, kind }
    }

    pub fn error(kind: IssueKind) -> Self {
        Self::new(Severity::Error, kind)
    }

    pub fn warning(kind: IssueKind) -> Self {
        Self::new(Severity::Warning, kind)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    pub fn issue_type(&self) -> IssueType {
        self.kind.issue_type()
    }

    pub fn legend(&self) -> &'static str {
        self.issue_type().legend()
    }

    /// Fully formatted, human-readable message
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.kind)
    }
}
