//! Flopcount: floating-point operation accounting per source function
//!
//! Counts the floating-point work a monitored program performs and splits it
//! between two paths: raw hardware arithmetic ("IEEE") and calls into an
//! Interflop numerical-analysis library ("Interflop"). Counts are kept per
//! source function and reported at exit with totals and percentage shares.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  FLOPCOUNT Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ResolvedSymbol ──► SymbolClassifier ◄── RuleSets (glob)     │
//! │                          │                                   │
//! │              Ignore / IEEE / Interflop                       │
//! │                          ▼                                   │
//! │  FpOp (lanes) ──► FunctionRegistry + CounterArray (per path) │
//! │                          ▼                                   │
//! │                      FlopReport                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use flopcount::{FpOp, ProfilingEngine, ResolvedSymbol};
//!
//! let mut engine = ProfilingEngine::new();
//! let symbol = ResolvedSymbol::for_function("saxpy")
//!     .with_library("/usr/bin/app")
//!     .with_directory("/src")
//!     .with_file("blas.c");
//! let inc = engine.register_operation(&symbol, FpOp::Add32Fx4).unwrap();
//! engine.apply(inc);
//!
//! let report = engine.finish();
//! assert_eq!(report.ieee.total, 4);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod classifier;
mod config;
mod counters;
mod engine;
mod glob;
mod registry;
mod report;
mod result;
mod rules;
mod symbol;

/// Floating-point opcode taxonomy
pub mod taxonomy;

/// Offline replay of recorded instruction sites
pub mod trace;

pub use classifier::{Classification, SymbolClassifier};
pub use config::ProfilerConfig;
pub use counters::{CounterArray, DEFAULT_INITIAL_CAPACITY};
pub use engine::{FpPath, InstructionSite, PathCounters, ProfilingEngine, ScheduledIncrement};
pub use self::glob::{glob_match, GlobPattern};
pub use registry::{FunctionId, FunctionRecord, FunctionRegistry};
pub use report::{FlopReport, FunctionCount, PathReport, Ratios, NO_FUNCTIONS_VISITED};
pub use result::{FlopError, FlopResult};
pub use rules::{PatternList, RuleConfig, RuleList, RuleSets};
pub use symbol::{bounded_name, FunctionKey, ResolvedSymbol, SymbolName, MAX_NAME_LEN, UNKNOWN_NAME};
pub use taxonomy::{label_of, BitWidth, Category, FpOp, OpcodeDescriptor, UNKNOWN_LABEL};
pub use trace::{replay, Trace, TraceSite};
