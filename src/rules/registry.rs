#![forbid(unsafe_code)]

//! Rule registry for managing the active rules
//!
//! The RuleRegistry is responsible for:
//! - Instantiating the built-in rules with their configured settings
//! - Filtering rules based on configuration
//! - Providing access to rules by ID, in execution order

use crate::config::Config;
use crate::rules::Rule;
use crate::rules::builtin::builtin_rules;
use crate::types::RuleId;

/// Registry for storing and managing all rules
///
/// Rules are kept in execution order. They are stored as trait objects so
/// the engine can treat every rule alike.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// All built-in rules with default settings
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(&Config::default()),
        }
    }

    /// Built-in rules configured from `config`, with disabled rules removed
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            rules: builtin_rules(config),
        };
        registry.filter_by_config(config);
        registry
    }

    /// Append a rule; it runs after every rule already registered
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Filter rules based on configuration
    ///
    /// Rules are enabled by default unless explicitly disabled.
    pub fn filter_by_config(&mut self, config: &Config) {
        self.rules
            .retain(|rule| config.is_rule_enabled(rule.id().as_str()));
    }

    /// Get a rule by its ID
    pub fn get_rule(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == id)
            .map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in execution order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
