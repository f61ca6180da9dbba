#![forbid(unsafe_code)]

//! Rule definitions and registry

pub mod abbreviation;
pub mod arxiv;
pub mod builtin;
pub mod capitalization;
pub mod duplicates;
pub mod fields;
pub mod pages;
pub mod prefix;
mod registry;
mod rule;
pub mod year;

#[cfg(test)]
mod test_support;

pub use abbreviation::AbbreviationRule;
pub use arxiv::ArxivStatusRule;
pub use capitalization::CapitalizationRule;
pub use duplicates::DuplicatesRule;
pub use fields::RequiredFieldsRule;
pub use pages::PageRangeRule;
pub use prefix::ProceedingsPrefixRule;
pub use registry::RuleRegistry;
pub use rule::{ExecutionContext, Finding, Rule};
pub use year::YearInVenueRule;
