//! The profiling engine.
//!
//! One [`ProfilingEngine`] holds everything a monitored run mutates: the
//! classifier and, for each accounting path, a registry paired with its
//! counters. It is created when monitoring starts, receives every
//! instruction site during instrumentation, receives the increments at run
//! time and is consumed into a [`FlopReport`] at exit.

use crate::classifier::{Classification, SymbolClassifier};
use crate::config::ProfilerConfig;
use crate::counters::CounterArray;
use crate::registry::{FunctionId, FunctionRegistry};
use crate::report::{FlopReport, PathReport};
use crate::result::FlopResult;
use crate::symbol::ResolvedSymbol;
use crate::taxonomy::FpOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accounting path of a counted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FpPath {
    /// Raw hardware arithmetic
    Ieee,
    /// Calls into an Interflop library
    Interflop,
}

impl FpPath {
    /// Name used in reports
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ieee => "IEEE",
            Self::Interflop => "Interflop",
        }
    }
}

impl fmt::Display for FpPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A registry and its counters, kept the same length
#[derive(Debug)]
pub struct PathCounters {
    path: FpPath,
    registry: FunctionRegistry,
    counters: CounterArray,
}

impl PathCounters {
    /// Empty pair for `path`
    #[must_use]
    pub fn new(path: FpPath, initial_capacity: usize) -> Self {
        Self {
            path,
            registry: FunctionRegistry::new(),
            counters: CounterArray::with_capacity(initial_capacity),
        }
    }

    /// ID of the function holding `symbol`, registering it on first sight
    pub fn function_id(&mut self, symbol: &ResolvedSymbol) -> FunctionId {
        let (id, created) = self.registry.get_or_insert(symbol);
        if created {
            self.counters.append();
            tracing::debug!(path = %self.path, key = %symbol.key(), id = id.as_u32(), "new function");
        }
        id
    }

    /// Add `amount` to the counter of `id`
    #[inline]
    pub fn increment(&mut self, id: FunctionId, amount: u64) {
        self.counters.increment_by(id, amount);
    }

    /// Which path this is
    #[must_use]
    pub const fn path(&self) -> FpPath {
        self.path
    }

    /// Registered functions
    #[must_use]
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Counter storage
    #[must_use]
    pub fn counters(&self) -> &CounterArray {
        &self.counters
    }
}

/// An increment to perform every time an instrumented instruction runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledIncrement {
    /// Path whose counter is incremented
    pub path: FpPath,
    /// Counter slot
    pub id: FunctionId,
    /// Amount added per execution
    pub amount: u64,
}

/// One guest instruction as seen by the instrumentation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSite {
    /// Debug information of the instruction
    pub symbol: ResolvedSymbol,
    /// Floating-point operations the instruction performs
    pub ops: Vec<FpOp>,
}

impl InstructionSite {
    /// Site without operations
    #[must_use]
    pub fn new(symbol: ResolvedSymbol) -> Self {
        Self {
            symbol,
            ops: Vec::new(),
        }
    }

    /// Add an operation
    #[must_use]
    pub fn with_op(mut self, op: FpOp) -> Self {
        self.ops.push(op);
        self
    }
}

/// Engine state for one monitored run
#[derive(Debug)]
pub struct ProfilingEngine {
    classifier: SymbolClassifier,
    ieee: PathCounters,
    interflop: PathCounters,
}

impl ProfilingEngine {
    /// Engine with the default rules and capacity
    #[must_use]
    pub fn new() -> Self {
        let config = ProfilerConfig::default();
        Self::with_classifier(SymbolClassifier::default(), config.initial_capacity)
    }

    /// Engine built from a configuration
    pub fn from_config(config: &ProfilerConfig) -> FlopResult<Self> {
        config.validate()?;
        let classifier = SymbolClassifier::new(config.rule_sets()?);
        Ok(Self::with_classifier(classifier, config.initial_capacity))
    }

    /// Engine with an explicit classifier
    #[must_use]
    pub fn with_classifier(classifier: SymbolClassifier, initial_capacity: usize) -> Self {
        Self {
            classifier,
            ieee: PathCounters::new(FpPath::Ieee, initial_capacity),
            interflop: PathCounters::new(FpPath::Interflop, initial_capacity),
        }
    }

    /// Classify a symbol
    #[must_use]
    pub fn classify(&self, symbol: &ResolvedSymbol) -> Classification {
        self.classifier.classify(symbol)
    }

    /// The classifier in use
    #[must_use]
    pub fn classifier(&self) -> &SymbolClassifier {
        &self.classifier
    }

    /// Counters of one path
    #[must_use]
    pub const fn path(&self, path: FpPath) -> &PathCounters {
        match path {
            FpPath::Ieee => &self.ieee,
            FpPath::Interflop => &self.interflop,
        }
    }

    fn path_mut(&mut self, path: FpPath) -> &mut PathCounters {
        match path {
            FpPath::Ieee => &mut self.ieee,
            FpPath::Interflop => &mut self.interflop,
        }
    }

    /// Decide the increments for one operation at `symbol`
    ///
    /// Only arithmetic operations on the IEEE path are counted, by their
    /// lane count. Inside Interflop functions the call is counted instead
    /// of the operations, see [`Self::register_entry`].
    pub fn register_operation(
        &mut self,
        symbol: &ResolvedSymbol,
        op: FpOp,
    ) -> Option<ScheduledIncrement> {
        let class = self.classify(symbol);
        self.count_operation(class, symbol, op)
    }

    /// Decide the increment for the entry instruction of an Interflop function
    pub fn register_entry(&mut self, symbol: &ResolvedSymbol) -> Option<ScheduledIncrement> {
        let class = self.classify(symbol);
        self.count_entry(class, symbol)
    }

    fn count_operation(
        &mut self,
        class: Classification,
        symbol: &ResolvedSymbol,
        op: FpOp,
    ) -> Option<ScheduledIncrement> {
        if class != Classification::Ieee || !op.is_arithmetic() {
            return None;
        }
        let id = self.ieee.function_id(symbol);
        Some(ScheduledIncrement {
            path: FpPath::Ieee,
            id,
            amount: op.size_of(),
        })
    }

    fn count_entry(
        &mut self,
        class: Classification,
        symbol: &ResolvedSymbol,
    ) -> Option<ScheduledIncrement> {
        if !symbol.is_entry || class != Classification::Interflop {
            return None;
        }
        let id = self.interflop.function_id(symbol);
        Some(ScheduledIncrement {
            path: FpPath::Interflop,
            id,
            amount: 1,
        })
    }

    /// Decide every increment for one instruction site
    ///
    /// The site is classified once for all of its operations.
    pub fn instrument_site(&mut self, site: &InstructionSite) -> Vec<ScheduledIncrement> {
        let class = self.classify(&site.symbol);
        match class {
            Classification::Ignore => Vec::new(),
            Classification::Interflop => self.count_entry(class, &site.symbol).into_iter().collect(),
            Classification::Ieee => site
                .ops
                .iter()
                .filter_map(|&op| self.count_operation(class, &site.symbol, op))
                .collect(),
        }
    }

    /// Run-time effect of a scheduled increment
    #[inline]
    pub fn apply(&mut self, increment: ScheduledIncrement) {
        self.path_mut(increment.path)
            .increment(increment.id, increment.amount);
    }

    /// Apply an increment for `times` executions at once
    pub fn apply_times(&mut self, increment: ScheduledIncrement, times: u64) {
        self.path_mut(increment.path)
            .increment(increment.id, increment.amount.saturating_mul(times));
    }

    /// Build the end-of-run report
    ///
    /// # Panics
    ///
    /// Panics if a path's counters and registry disagree in size.
    #[must_use]
    pub fn report(&self) -> FlopReport {
        let report = FlopReport::new(
            PathReport::collect(&self.ieee),
            PathReport::collect(&self.interflop),
        );
        tracing::info!(
            ieee_functions = report.ieee.functions.len(),
            ieee_total = report.ieee.total,
            interflop_functions = report.interflop.functions.len(),
            interflop_total = report.interflop.total,
            "report ready"
        );
        report
    }

    /// Build the report and release the engine
    #[must_use]
    pub fn finish(self) -> FlopReport {
        self.report()
    }
}

impl Default for ProfilingEngine {
    fn default() -> Self {
        Self::new()
    }
}
