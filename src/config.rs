//! Configuration file parsing and validation

pub mod bibcheck_toml;

pub use bibcheck_toml::{
    AbbreviationsConfig, ArxivConfig, CONFIG_FILE_NAME, CapitalizationConfig, ColorOption, Config,
    OutputConfig, OutputFormat, RulesConfig,
};
