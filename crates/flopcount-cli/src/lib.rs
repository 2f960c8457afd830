//! Flopcount CLI Library
//!
//! Command-line driver over the flopcount accounting engine: replays
//! recorded instruction traces and exposes the classifier, the opcode
//! taxonomy and the rule lists for inspection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;

pub use commands::{
    ClassifyArgs, Cli, Commands, OpcodeArgs, ReplayArgs, ReportFormat, RulesArgs,
};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
