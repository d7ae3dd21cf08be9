//! Adjustment pass: shift every record and restore canonical order.

use super::offsets::{compute_offsets, scan_markers, ClockOffsets, ManualOffset};
use crate::output::{create_output_file, ensure_distinct};
use crate::parser::{TraceLine, TraceReader};
use crate::record::sort_canonical;
use crate::utils::config::ResyncConfig;
use crate::utils::error::ResyncError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Summary of one resync run
#[derive(Debug, Clone, Default)]
pub struct ResyncReport {
    pub offsets: ClockOffsets,
    /// Recorders left at zero automatic offset
    pub unsynchronized: Vec<u64>,
    pub pass_through_lines: usize,
    pub records_written: usize,
}

/// Counts produced by [`adjust_trace`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustStats {
    pub pass_through_lines: usize,
    pub records_written: usize,
}

/// Second pass: copy pass-through lines as they are met, then write all
/// adjusted records in canonical order.
///
/// Every record is held in memory for the final sort.
pub fn adjust_trace<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    offsets: &ClockOffsets,
) -> Result<AdjustStats, ResyncError> {
    let mut stats = AdjustStats::default();
    let mut records = Vec::new();

    for item in TraceReader::new(reader) {
        match item? {
            (_, TraceLine::PassThrough(line)) => {
                writeln!(writer, "{}", line)?;
                stats.pass_through_lines += 1;
            }
            (_, TraceLine::Record(mut record)) => {
                offsets.apply(&mut record);
                records.push(record);
            }
        }
    }

    debug!("Sorting {} adjusted records", records.len());
    sort_canonical(&mut records);

    for record in &records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;

    stats.records_written = records.len();
    Ok(stats)
}

/// Resynchronize `input` into `output`.
///
/// `manual` offsets are applied after any configured in `config`.
///
/// # Errors
/// * `ResyncError::Parse` - malformed trace line
/// * `ResyncError::MissingReferenceMarker` - reference recorder has no marker
/// * `ResyncError::Io` / `ResyncError::Output` - file access failures
pub fn resync_file(
    input: &Path,
    output: &Path,
    config: &ResyncConfig,
    manual: &[ManualOffset],
) -> Result<ResyncReport, ResyncError> {
    ensure_distinct(input, output)?;

    info!("Scanning {} for synchronization markers", input.display());
    let scan = scan_markers(BufReader::new(File::open(input)?), &config.marker)?;

    let mut all_manual = config.parsed_offsets()?;
    all_manual.extend_from_slice(manual);

    let offsets = compute_offsets(&scan, config.reference_recorder, &all_manual)?;
    for (recorder, offset) in offsets.iter() {
        info!("Recorder {} offset {}", recorder, offset);
    }

    let writer = BufWriter::new(create_output_file(output)?);
    let stats = adjust_trace(BufReader::new(File::open(input)?), writer, &offsets)?;

    info!(
        "Wrote {} records and {} pass-through lines to {}",
        stats.records_written,
        stats.pass_through_lines,
        output.display()
    );

    Ok(ResyncReport {
        offsets,
        unsynchronized: scan.unsynchronized(),
        pass_through_lines: stats.pass_through_lines,
        records_written: stats.records_written,
    })
}
