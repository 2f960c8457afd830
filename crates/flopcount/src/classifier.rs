//! Symbol classification: ignore, IEEE or Interflop.

use crate::rules::RuleSets;
use crate::symbol::ResolvedSymbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an instruction site's floating-point work is accounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Not counted
    Ignore,
    /// Raw hardware arithmetic
    Ieee,
    /// Inside an Interflop library
    Interflop,
}

impl Classification {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Ieee => "ieee",
            Self::Interflop => "interflop",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the [`Classification`] of resolved symbols
#[derive(Debug, Clone, Default)]
pub struct SymbolClassifier {
    rules: RuleSets,
}

impl SymbolClassifier {
    /// Classifier over the given rule sets
    #[must_use]
    pub fn new(rules: RuleSets) -> Self {
        Self { rules }
    }

    /// Rule sets in use
    #[must_use]
    pub fn rules(&self) -> &RuleSets {
        &self.rules
    }

    /// Classify a symbol; the first matching rule wins
    #[must_use]
    pub fn classify(&self, symbol: &ResolvedSymbol) -> Classification {
        let rules = &self.rules;
        let library = symbol.library.as_str();
        let file = symbol.file.as_str();
        let function = symbol.function.as_str();

        if symbol.function.is_unknown() || function == "???" {
            return Classification::Ignore;
        }
        if rules.ignored_libraries.matches_any(library)
            || rules.ignored_functions.matches_any(function)
            || rules.interflop_excluded_files.matches_any(file)
            || rules.interflop_excluded_functions.matches_any(function)
        {
            return Classification::Ignore;
        }
        // Only the entry of an Interflop function counts, once per call.
        if symbol.is_entry && rules.interflop_included_functions.matches_any(function) {
            return Classification::Interflop;
        }
        if rules.interflop_included_libraries.matches_any(library) {
            return Classification::Interflop;
        }
        Classification::Ieee
    }
}
