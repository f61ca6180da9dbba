//! Output formatters (human, JSONL and HTML)

pub mod html;
pub mod human;
pub mod jsonl;
pub mod rule_status;

pub use html::HtmlFormatter;
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use rule_status::{RuleStatus, RuleStatusHumanFormatter, RuleStatusJsonlFormatter};
