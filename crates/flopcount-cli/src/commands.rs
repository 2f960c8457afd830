//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Flopcount: count floating-point operations per function, IEEE vs Interflop
#[derive(Parser, Debug)]
#[command(name = "flopcount")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay an instruction trace and print the report
    Replay(ReplayArgs),

    /// Classify one resolved symbol
    Classify(ClassifyArgs),

    /// Describe a floating-point opcode
    Opcode(OpcodeArgs),

    /// Print the effective classification rules
    Rules(RulesArgs),
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text report
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Trace file (YAML, or JSON with a .json extension)
    pub trace: PathBuf,

    /// Profiler configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Function name
    #[arg(long)]
    pub function: String,

    /// Library (object file) path
    #[arg(long)]
    pub library: Option<String>,

    /// Source directory
    #[arg(long)]
    pub directory: Option<String>,

    /// Source file
    #[arg(long)]
    pub file: Option<String>,

    /// The instruction is the entry of its function
    #[arg(long)]
    pub entry: bool,

    /// Profiler configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the opcode command
#[derive(Parser, Debug)]
pub struct OpcodeArgs {
    /// IR opcode name, e.g. Add32Fx4
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// List the whole taxonomy
    #[arg(long, conflicts_with = "name")]
    pub all: bool,
}

/// Arguments for the rules command
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Profiler configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["flopcount", "-vv", "replay", "run.yaml", "--format", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.trace, PathBuf::from("run.yaml"));
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "flopcount",
            "classify",
            "--function",
            "_interflop_add_float",
            "--library",
            "/usr/lib/libinterflop_mca.so",
            "--entry",
        ])
        .unwrap();
        match cli.command {
            Commands::Classify(args) => {
                assert_eq!(args.function, "_interflop_add_float");
                assert!(args.entry);
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_function() {
        let err = Cli::try_parse_from(["flopcount", "classify", "--library", "/bin/app"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_opcode_requires_name_or_all() {
        assert!(Cli::try_parse_from(["flopcount", "opcode"]).is_err());
        assert!(Cli::try_parse_from(["flopcount", "opcode", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["flopcount", "opcode", "AddF64", "--all"]).is_err());
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::try_parse_from(["flopcount", "rules", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
