//! Command handlers
//!
//! Each handler returns the text to print so that it can be tested without
//! spawning the binary.

use crate::commands::{ClassifyArgs, OpcodeArgs, ReplayArgs, ReportFormat, RulesArgs};
use crate::error::{CliError, CliResult};
use flopcount::{
    replay, FpOp, ProfilerConfig, ProfilingEngine, ResolvedSymbol, RuleList, SymbolName, Trace,
};
use std::fmt::Write as _;
use std::path::Path;

/// Load the profiler configuration, or the defaults when no file is given
pub fn load_config(path: Option<&Path>) -> CliResult<ProfilerConfig> {
    match path {
        None => Ok(ProfilerConfig::default()),
        Some(p) if !p.is_file() => Err(CliError::config(format!(
            "configuration file not found: {}",
            p.display()
        ))),
        Some(p) => Ok(ProfilerConfig::from_path(p)?),
    }
}

/// Execute the replay command
pub fn execute_replay(args: &ReplayArgs) -> CliResult<String> {
    let config = load_config(args.config.as_deref())?;
    let trace = Trace::from_path(&args.trace)?;
    let mut engine = ProfilingEngine::from_config(&config)?;
    replay(&mut engine, &trace);
    let report = engine.finish();
    match args.format {
        ReportFormat::Text => Ok(report.to_text()),
        ReportFormat::Json => {
            let mut out = report.to_json()?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn name_arg(value: Option<&str>, flag: &str) -> CliResult<SymbolName> {
    match value {
        Some(v) if v.is_empty() => Err(CliError::invalid_argument(format!(
            "--{flag} must not be empty"
        ))),
        Some(v) => Ok(SymbolName::known(v)),
        None => Ok(SymbolName::Unknown),
    }
}

/// Execute the classify command
pub fn execute_classify(args: &ClassifyArgs) -> CliResult<String> {
    let config = load_config(args.config.as_deref())?;
    let engine = ProfilingEngine::from_config(&config)?;
    let symbol = ResolvedSymbol {
        library: name_arg(args.library.as_deref(), "library")?,
        directory: name_arg(args.directory.as_deref(), "directory")?,
        file: name_arg(args.file.as_deref(), "file")?,
        function: name_arg(Some(args.function.as_str()), "function")?,
        line: 0,
        is_entry: args.entry,
    };
    let class = engine.classify(&symbol);
    tracing::debug!(key = %symbol.key(), class = %class, "classified");
    Ok(format!("{class}\n"))
}

fn describe(op: FpOp) -> String {
    let d = op.descriptor();
    let mut out = String::new();
    let _ = writeln!(out, "name: {}", op.raw_name());
    let _ = writeln!(out, "bit width: {}", d.bit_width.bits());
    let _ = writeln!(out, "lanes: {}", d.lanes);
    let _ = writeln!(out, "category: {:?}", d.category);
    let _ = writeln!(out, "countable: {}", if op.is_arithmetic() { "yes" } else { "no" });
    let _ = writeln!(out, "label: {}", op.label());
    out
}

/// Execute the opcode command
pub fn execute_opcode(args: &OpcodeArgs) -> CliResult<String> {
    if args.all {
        let mut out = String::new();
        for &op in FpOp::ALL {
            let count = if op.is_arithmetic() {
                op.size_of().to_string()
            } else {
                "-".to_string()
            };
            let _ = writeln!(out, "{:<20} {:<16} {count}", op.raw_name(), op.label());
        }
        return Ok(out);
    }
    let name = args
        .name
        .as_deref()
        .ok_or_else(|| CliError::invalid_argument("an opcode name or --all is required"))?;
    let op: FpOp = name.parse()?;
    Ok(describe(op))
}

/// Execute the rules command
pub fn execute_rules(args: &RulesArgs) -> CliResult<String> {
    let config = load_config(args.config.as_deref())?;
    let rules = config.rule_sets()?;
    let mut out = String::new();
    for list in RuleList::ALL {
        let patterns = rules.get(list);
        let _ = writeln!(out, "{} ({}):", list.name(), patterns.len());
        for pattern in patterns.patterns() {
            let _ = writeln!(out, "\t{pattern}");
        }
    }
    Ok(out)
}
