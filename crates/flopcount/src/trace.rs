//! Instruction-site traces for offline replay.
//!
//! A trace stands in for the binary rewriter: each entry is one guest
//! instruction with its debug information, the opcodes it writes and how
//! many times it ran. Replaying a trace drives the engine exactly as an
//! instrumented run would.

use crate::engine::{InstructionSite, ProfilingEngine};
use crate::result::{FlopError, FlopResult};
use crate::symbol::ResolvedSymbol;
use crate::taxonomy::FpOp;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn one() -> u64 {
    1
}

/// One traced instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSite {
    /// Debug information
    #[serde(flatten)]
    pub symbol: ResolvedSymbol,
    /// Raw IR names of the operations the instruction writes
    #[serde(default)]
    pub ops: Vec<String>,
    /// Number of executions
    #[serde(default = "one")]
    pub executions: u64,
}

impl TraceSite {
    /// Resolve the opcode names; names outside the taxonomy are skipped
    #[must_use]
    pub fn to_instruction(&self) -> InstructionSite {
        let ops = self
            .ops
            .iter()
            .filter_map(|name| {
                let op = FpOp::lookup(name);
                if op.is_none() {
                    tracing::trace!(opcode = %name, "not a floating-point opcode");
                }
                op
            })
            .collect();
        InstructionSite {
            symbol: self.symbol.clone(),
            ops,
        }
    }
}

/// A recorded run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Instructions in recording order
    #[serde(default)]
    pub sites: Vec<TraceSite>,
}

impl Trace {
    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> FlopResult<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> FlopResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a trace file; `.json` is read as JSON, anything else as YAML
    pub fn from_path(path: &Path) -> FlopResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FlopError::trace(format!("cannot read {}: {e}", path.display()))
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let trace = if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }?;
        tracing::debug!(path = %path.display(), sites = trace.sites.len(), "trace loaded");
        Ok(trace)
    }

    /// Total executions recorded
    #[must_use]
    pub fn executions(&self) -> u64 {
        self.sites
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.executions))
    }
}

/// Instrument every site of `trace` and apply its increments
pub fn replay(engine: &mut ProfilingEngine, trace: &Trace) {
    for site in &trace.sites {
        let increments = engine.instrument_site(&site.to_instruction());
        if site.executions == 0 {
            continue;
        }
        for inc in increments {
            engine.apply_times(inc, site.executions);
        }
    }
}
