//! Summary command implementation.

use crate::commands::models::SummaryArgs;
use crate::output::{read_round_trips, write_summary};
use crate::stats::{render_summary_table, summarize, LatencySummary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;

/// Execute the summary command
pub fn execute_summary(args: SummaryArgs) -> Result<LatencySummary> {
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let samples = read_round_trips(BufReader::new(file))
        .with_context(|| format!("Failed to read round-trip table {}", args.input.display()))?;

    let summary = summarize(&samples, args.max_size, &args.input.display().to_string());

    if let Some(path) = &args.json {
        write_summary(&summary, path).context("Failed to write summary JSON")?;
    }

    if args.print_table {
        println!("{}", render_summary_table(&summary));
    }

    Ok(summary)
}

/// Validate summary arguments
pub fn validate_summary_args(args: &SummaryArgs) -> Result<()> {
    if !args.input.is_file() {
        anyhow::bail!("Round-trip table not found: {}", args.input.display());
    }

    if args.max_size == 0 {
        anyhow::bail!("max_size must be greater than 0");
    }

    Ok(())
}
