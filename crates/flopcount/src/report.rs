//! End-of-run accounting.

use crate::engine::{FpPath, PathCounters};
use crate::registry::FunctionId;
use crate::symbol::FunctionKey;
use serde::Serialize;
use std::fmt::{self, Write as _};

const RULE: &str = "-------------------------";

/// Text of the report when nothing was counted
pub const NO_FUNCTIONS_VISITED: &str = "No functions visited";

/// Count of one function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCount {
    /// Library name, bounded
    pub library: String,
    /// Identity key
    pub key: FunctionKey,
    /// Counter slot
    pub id: FunctionId,
    /// Operations counted
    pub count: u64,
}

/// Counts of one accounting path, in key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Which path this is
    #[serde(skip)]
    pub path: FpPath,
    /// Per-function counts
    pub functions: Vec<FunctionCount>,
    /// Sum of all counts
    pub total: u64,
}

impl PathReport {
    /// Walk a registry and its counters
    ///
    /// # Panics
    ///
    /// Panics if the counters hold a different number of live slots than
    /// the registry has functions.
    #[must_use]
    pub fn collect(pair: &PathCounters) -> Self {
        let registry = pair.registry();
        let counters = pair.counters();
        assert_eq!(
            counters.live_count(),
            registry.len(),
            "{} counters out of step with registry",
            pair.path()
        );

        let mut total = 0u64;
        let functions = registry
            .iter()
            .map(|record| {
                let count = counters.get(record.id);
                total = total.saturating_add(count);
                FunctionCount {
                    library: record.library_name.clone(),
                    key: record.key.clone(),
                    id: record.id,
                    count,
                }
            })
            .collect();

        Self {
            path: pair.path(),
            functions,
            total,
        }
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        let title = self.path.title();
        writeln!(out, "{} {title} functions visited", self.functions.len())?;
        writeln!(out, "{RULE}")?;
        for f in &self.functions {
            writeln!(out, "\t* {} -> {} : {}", f.library, f.key, f.count)?;
        }
        writeln!(out, "{RULE}")?;
        writeln!(out, "{title} FP: {}", self.total)?;
        writeln!(out)
    }
}

/// Percentages of the grand total, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratios {
    /// IEEE share
    pub ieee: u64,
    /// Interflop share
    pub interflop: u64,
}

impl Ratios {
    /// Shares of `ieee` and `interflop`, `None` when both are 0
    #[must_use]
    pub fn compute(ieee: u64, interflop: u64) -> Option<Self> {
        let sum = u128::from(ieee) + u128::from(interflop);
        if sum == 0 {
            return None;
        }
        let share = |part: u64| u64::try_from(u128::from(part) * 100 / sum).unwrap_or(100);
        Some(Self {
            ieee: share(ieee),
            interflop: share(interflop),
        })
    }
}

/// Final report of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlopReport {
    /// IEEE path
    pub ieee: PathReport,
    /// Interflop path
    pub interflop: PathReport,
    /// `null` when nothing was counted
    pub ratios: Option<Ratios>,
}

impl FlopReport {
    /// Combine two path reports
    #[must_use]
    pub fn new(ieee: PathReport, interflop: PathReport) -> Self {
        let ratios = Ratios::compute(ieee.total, interflop.total);
        Self {
            ieee,
            interflop,
            ratios,
        }
    }

    /// Check whether any operation was counted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ratios.is_none()
    }

    /// Render the text report
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> crate::FlopResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for FlopReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ratios) = self.ratios else {
            return writeln!(f, "{NO_FUNCTIONS_VISITED}");
        };
        let mut out = String::new();
        self.ieee.render(&mut out)?;
        self.interflop.render(&mut out)?;
        writeln!(out, "IEEE FP ratio: {}%", ratios.ieee)?;
        writeln!(out, "Interflop FP ratio: {}%", ratios.interflop)?;
        f.write_str(&out)
    }
}
