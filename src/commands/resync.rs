//! Resync command implementation.
//!
//! The resync command:
//! 1. Loads the optional TOML configuration
//! 2. Parses manual offsets
//! 3. Scans the trace for synchronization markers
//! 4. Writes the adjusted, re-sorted trace

use crate::commands::models::ResyncArgs;
use crate::output::{derive_output_path, ensure_distinct};
use crate::resync::{resync_file, ManualOffset};
use crate::utils::config::{load_resync_config, ResyncConfig, ADJUSTED_TRACE_SUFFIX};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the resync command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the adjusted trace
///
/// # Errors
/// * Config or offset parse errors
/// * Trace parse errors
/// * Missing reference marker
/// * File write errors
pub fn execute_resync(args: ResyncArgs) -> Result<PathBuf> {
    let start_time = Instant::now();

    let config = match &args.config {
        Some(path) => load_resync_config(path)
            .with_context(|| format!("Failed to load resync config {}", path.display()))?,
        None => ResyncConfig::default(),
    };
    debug!("Resync config: {:?}", config);

    let manual = parse_manual_offsets(&args.manual_offsets)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input, ADJUSTED_TRACE_SUFFIX));

    let report = resync_file(&args.input, &output, &config, &manual)
        .with_context(|| format!("Failed to resync {}", args.input.display()))?;

    for (recorder, offset) in report.offsets.iter() {
        println!("recorder {} offset {}", recorder, offset);
    }
    for recorder in &report.unsynchronized {
        println!(
            "{}",
            format!("recorder {} has no marker (offset 0)", recorder).yellow()
        );
    }

    info!(
        "Resync complete in {:.2}s: {}",
        start_time.elapsed().as_secs_f64(),
        output.display()
    );

    Ok(output)
}

/// Parse `RECORDER:DELTA` arguments
pub fn parse_manual_offsets(raw: &[String]) -> Result<Vec<ManualOffset>> {
    raw.iter()
        .map(|s| {
            s.parse::<ManualOffset>()
                .with_context(|| format!("Bad manual offset argument '{}'", s))
        })
        .collect()
}

/// Validate resync arguments
///
/// **Public** - can be called before execute_resync for early validation
pub fn validate_resync_args(args: &ResyncArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input trace not found: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        ensure_distinct(&args.input, output)
            .context("Output path must differ from the input trace")?;
    }

    parse_manual_offsets(&args.manual_offsets)?;

    Ok(())
}
