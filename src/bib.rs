//! Bibliography model and parser

pub mod parser;
pub mod record;

pub use parser::{parse_file, parse_str};
pub use record::{FieldMap, Record};
