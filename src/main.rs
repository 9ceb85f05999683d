//! Symex Report CLI
//!
//! Renders the SSA trace of a symbolic-execution run as a program listing
//! or as byte extract / update reports.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::error;
use std::path::PathBuf;

use symex_report::aggregator::OperationKind;
use symex_report::commands::{execute_program, execute_report, ProgramArgs, ReportArgs};
use symex_report::output::OutputFormat;
use symex_report::utils::config::EXIT_USAGE_ERROR;
use symex_report::utils::ReportError;

/// Symex Report - diagnostics for symbolic-execution traces
#[derive(Parser, Debug)]
#[command(name = "symex-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by the byte-operation reports
#[derive(Args, Debug)]
struct ReportOptions {
    /// Path to the SSA trace JSON file
    #[arg(short, long)]
    trace: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", env = "SYMEX_REPORT_FORMAT")]
    format: OutputFormat,

    /// Write the report to this file ("-" for stdout)
    #[arg(short, long, env = "SYMEX_REPORT_OUTFILE")]
    outfile: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the numbered SSA program
    Program {
        /// Path to the SSA trace JSON file
        #[arg(short, long)]
        trace: PathBuf,

        /// Write the listing to this file ("-" for stdout)
        #[arg(short, long)]
        outfile: Option<PathBuf>,
    },

    /// Report byte extracts
    ByteExtracts {
        #[command(flatten)]
        options: ReportOptions,
    },

    /// Report byte updates
    ByteUpdates {
        #[command(flatten)]
        options: ReportOptions,
    },

    /// Report byte extracts and byte updates together
    ByteOps {
        #[command(flatten)]
        options: ReportOptions,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(err) = run(cli.command) {
        if let Some(report_err) = err.downcast_ref::<ReportError>() {
            if report_err.is_usage_error() {
                error!("{}", report_err);
                std::process::exit(EXIT_USAGE_ERROR);
            }
        }
        return Err(err);
    }

    Ok(())
}

/// Dispatch one command
///
/// **Private** - keeps exit-status handling in main
fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Program { trace, outfile } => execute_program(&ProgramArgs {
            trace_path: trace,
            outfile,
        }),
        Commands::ByteExtracts { options } => {
            execute_report(&report_args(options, vec![OperationKind::Extract]))
        }
        Commands::ByteUpdates { options } => {
            execute_report(&report_args(options, vec![OperationKind::Update]))
        }
        Commands::ByteOps { options } => {
            execute_report(&report_args(options, OperationKind::ALL.to_vec()))
        }
        Commands::Version => {
            display_version();
            Ok(())
        }
    }
}

fn report_args(options: ReportOptions, kinds: Vec<OperationKind>) -> ReportArgs {
    ReportArgs {
        trace_path: options.trace,
        kinds,
        format: options.format,
        outfile: options.outfile,
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Symex Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Program listings and byte extract/update reports for SSA traces.");
}
