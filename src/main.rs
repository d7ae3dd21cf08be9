//! prv-sync CLI
//!
//! Aligns recorder clocks in Paraver traces and extracts round-trip
//! latencies from the communication records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use prv_sync::commands::{
    display_format, display_version, execute_resync, execute_rtt, execute_summary,
    validate_resync_args, validate_rtt_args, validate_summary_args, validate_trace_file,
    ResyncArgs, RttArgs, SummaryArgs,
};
use prv_sync::utils::config::DEFAULT_SUMMARY_MAX_SIZE;

/// prv-sync - Paraver trace clock alignment and latency extraction
#[derive(Parser, Debug)]
#[command(name = "prv-sync")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Align recorder clocks and write a re-sorted trace
    Resync {
        /// Input trace
        trace: PathBuf,

        /// Manual fine-tune offsets, RECORDER:DELTA (nanoseconds)
        #[arg(allow_hyphen_values = true)]
        offsets: Vec<String>,

        /// Output path (defaults to <trace>.adjusted.prv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file with marker, reference recorder and offsets
        #[arg(short, long, env = "PRV_SYNC_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Extract round-trip latencies into a CSV table
    Rtt {
        /// Input trace (raw or adjusted)
        trace: PathBuf,

        /// Output path (defaults to <trace>.rtt.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a round-trip table per message size
    Summary {
        /// Round-trip CSV table
        table: PathBuf,

        /// Largest message size kept, in bytes
        #[arg(long, default_value_t = DEFAULT_SUMMARY_MAX_SIZE)]
        max_size: u64,

        /// Also write the summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Do not print the table
        #[arg(long)]
        quiet: bool,
    },

    /// Parse a trace and report what it contains
    Validate {
        /// Input trace
        trace: PathBuf,
    },

    /// Display record format information
    Format {
        /// Show full format details
        #[arg(long)]
        show: bool,
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

    // Execute command
    match cli.command {
        Commands::Resync {
            trace,
            offsets,
            output,
            config,
        } => {
            let args = ResyncArgs {
                input: trace,
                output,
                manual_offsets: offsets,
                config,
            };

            validate_resync_args(&args)?;
            execute_resync(args)?;
        }

        Commands::Rtt { trace, output } => {
            let args = RttArgs {
                input: trace,
                output,
            };

            validate_rtt_args(&args)?;
            execute_rtt(args)?;
        }

        Commands::Summary {
            table,
            max_size,
            json,
            quiet,
        } => {
            let args = SummaryArgs {
                input: table,
                max_size,
                json,
                print_table: !quiet,
            };

            validate_summary_args(&args)?;
            execute_summary(args)?;
        }

        Commands::Validate { trace } => {
            validate_trace_file(trace)?;
        }

        Commands::Format { show } => {
            display_format(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
