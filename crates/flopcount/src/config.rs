//! Profiler configuration.

use crate::counters::DEFAULT_INITIAL_CAPACITY;
use crate::result::{FlopError, FlopResult};
use crate::rules::{RuleConfig, RuleSets};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profiler configuration
///
/// Every field has a default, so an empty file is a valid configuration
/// and yields the stock behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilerConfig {
    /// Classification pattern lists
    pub rules: RuleConfig,
    /// Initial slots of each counter array
    pub initial_capacity: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl ProfilerConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule lists
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Set the initial counter capacity
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> FlopResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> FlopResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file; `.json` is read as JSON, anything else as YAML
    pub fn from_path(path: &Path) -> FlopResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check values and patterns
    pub fn validate(&self) -> FlopResult<()> {
        if self.initial_capacity == 0 {
            return Err(FlopError::config("initial_capacity must be greater than 0"));
        }
        let _ = RuleSets::from_config(&self.rules)?;
        Ok(())
    }

    /// Compile the rule lists
    pub fn rule_sets(&self) -> FlopResult<RuleSets> {
        RuleSets::from_config(&self.rules)
    }
}
