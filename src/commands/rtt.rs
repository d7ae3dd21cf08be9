//! Rtt command implementation.

use crate::commands::models::RttArgs;
use crate::output::{derive_output_path, ensure_distinct};
use crate::rtt::extract_file;
use crate::utils::config::RTT_TABLE_SUFFIX;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Execute the rtt command, returning the table path
pub fn execute_rtt(args: RttArgs) -> Result<PathBuf> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input, RTT_TABLE_SUFFIX));

    let rows = extract_file(&args.input, &output)
        .with_context(|| format!("Failed to extract round trips from {}", args.input.display()))?;

    println!("{} round trips written to {}", rows, output.display());
    Ok(output)
}

/// Validate rtt arguments
pub fn validate_rtt_args(args: &RttArgs) -> Result<()> {
    if !args.input.is_file() {
        anyhow::bail!("Input trace not found: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        ensure_distinct(&args.input, output)
            .context("Output path must differ from the input trace")?;
    }

    Ok(())
}
