//! Parsing and validation for bibcheck.toml configuration files

use crate::error::ConfigError;
use crate::rules::abbreviation::DEFAULT_ALLOWED;
use crate::rules::arxiv::DEFAULT_RECENT_YEARS;
use crate::rules::builtin::BUILTIN_RULE_IDS;
use crate::types::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bibcheck.toml";

/// Main configuration struct for bibcheck.toml
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule enable/disable switches
    #[serde(default)]
    pub rules: RulesConfig,

    /// Venue abbreviation settings
    #[serde(default)]
    pub abbreviations: AbbreviationsConfig,

    /// Venue capitalization settings
    #[serde(default)]
    pub capitalization: CapitalizationConfig,

    /// arXiv status settings
    #[serde(default)]
    pub arxiv: ArxivConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        let mut unknown: Vec<&str> = self
            .rules
            .enabled
            .keys()
            .map(RuleId::as_str)
            .filter(|id| !BUILTIN_RULE_IDS.contains(id))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(ConfigError::Validation(format!(
                "Unknown rule '{}'. Run 'bibcheck list' to see available rules",
                unknown.join("', '")
            )));
        }

        for word in &self.capitalization.lowercase_words {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "Invalid lowercase word '{}': must be a single non-empty word",
                    word
                )));
            }
        }

        for abbreviation in &self.abbreviations.allowed {
            if abbreviation.is_empty() || abbreviation.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "Invalid allowed abbreviation '{}': must be a single non-empty token",
                    abbreviation
                )));
            }
        }

        Ok(())
    }

    /// Whether a rule is switched on; rules are enabled unless listed as `false`
    pub fn is_rule_enabled(&self, id: &str) -> bool {
        RuleId::new(id)
            .and_then(|id| self.rules.enabled.get(&id).copied())
            .unwrap_or(true)
    }
}

/// Rules configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule switches (flattened from the `[rules]` table)
    #[serde(flatten)]
    pub enabled: HashMap<RuleId, bool>,
}

/// `[abbreviations]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationsConfig {
    /// Acronyms never reported as abbreviations; replaces the default list
    #[serde(default = "default_allowed")]
    pub allowed: Vec<String>,
}

impl Default for AbbreviationsConfig {
    fn default() -> Self {
        Self {
            allowed: default_allowed(),
        }
    }
}

fn default_allowed() -> Vec<String> {
    DEFAULT_ALLOWED.iter().map(|s| s.to_string()).collect()
}

/// `[capitalization]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CapitalizationConfig {
    /// Words allowed to stay lowercase, on top of the built-in list
    #[serde(default)]
    pub lowercase_words: Vec<String>,
}

/// `[arxiv]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// How many years back a preprint still counts as recent
    #[serde(default = "default_recent_years")]
    pub recent_years: u32,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            recent_years: default_recent_years(),
        }
    }
}

fn default_recent_years() -> u32 {
    DEFAULT_RECENT_YEARS
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
    /// Standalone HTML report
    Html,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
