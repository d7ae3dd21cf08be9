//! Output writers for adjusted traces, round-trip tables and summaries.
//!
//! This module handles writing data to disk in various formats:
//! - CSV round-trip tables
//! - JSON latency summaries
//! - Output path derivation and preparation

pub mod csv;
pub mod json;

// Re-export main functions
pub use csv::{read_round_trips, RttCsvWriter};
pub use json::{read_summary, write_summary};

use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate `path`, create its parent directories, and open it for writing
pub fn create_output_file(path: &Path) -> Result<File, OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    File::create(path).map_err(OutputError::WriteFailed)
}

/// Reject an output path that resolves to the input file.
///
/// The output may not exist yet, so its parent is resolved and the file name
/// appended.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<(), OutputError> {
    let input = std::fs::canonicalize(input)?;

    let resolved = match std::fs::canonicalize(output) {
        Ok(path) => path,
        Err(_) => {
            let parent = output
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            match (std::fs::canonicalize(parent), output.file_name()) {
                (Ok(dir), Some(name)) => dir.join(name),
                // parent does not exist yet, so it cannot hold the input
                _ => return Ok(()),
            }
        }
    };

    if resolved == input {
        return Err(OutputError::InvalidPath(format!(
            "Output {} is the input trace",
            output.display()
        )));
    }

    Ok(())
}

/// Replace the extension of `input` with `suffix`.
///
/// `trace.prv` with `adjusted.prv` becomes `trace.adjusted.prv`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    input.with_extension(suffix)
}
