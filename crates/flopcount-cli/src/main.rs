//! Flopcount CLI: floating-point operation accounting
//!
//! ## Usage
//!
//! ```bash
//! flopcount replay run.yaml                  # Text report
//! flopcount replay run.json --format json    # JSON report
//! flopcount classify --function compute --library /usr/bin/app
//! flopcount opcode Add32Fx4                  # Describe an opcode
//! flopcount rules --config flopcount.yaml    # Effective rule lists
//! ```

use clap::Parser;
use flopcount_cli::{handlers, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    setup_tracing(config.verbosity);

    let output = match &cli.command {
        Commands::Replay(args) => handlers::execute_replay(args),
        Commands::Classify(args) => handlers::execute_classify(args),
        Commands::Opcode(args) => handlers::execute_opcode(args),
        Commands::Rules(args) => handlers::execute_rules(args),
    }?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new().with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
}

fn setup_tracing(verbosity: Verbosity) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .try_init();
}
