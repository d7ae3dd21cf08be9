//! Single-pass matching of opposite-direction message completions.

use crate::output::{create_output_file, ensure_distinct};
use crate::output::csv::RttCsvWriter;
use crate::parser::records;
use crate::record::{CommunicationRecord, Record};
use crate::utils::error::{ExtractError, ParseError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One matched request/response latency sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrip {
    /// Payload size of the completing message
    pub size_bytes: u64,
    /// Recorder that opened the exchange
    pub sender: u64,
    /// Recorder that answered
    pub receiver: u64,
    /// Completion time minus the opening send time
    pub duration_ns: i64,
}

/// Pending-send table keyed by directed recorder pair.
///
/// Only the latest send per direction is remembered; an older unmatched send
/// is dropped when a newer one on the same pair arrives.
#[derive(Debug, Default)]
pub struct RoundTripExtractor {
    last_send: HashMap<(u64, u64), i64>,
}

impl RoundTripExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one communication, returning a sample if the reverse direction
    /// has a remembered send.
    pub fn observe(&mut self, comm: &CommunicationRecord) -> Option<RoundTrip> {
        let from = comm.sender.recorder_id;
        let to = comm.receiver.recorder_id;

        let sample = self.last_send.get(&(to, from)).map(|&opened_at| RoundTrip {
            size_bytes: comm.size,
            sender: to,
            receiver: from,
            duration_ns: comm.logical_receive.saturating_sub(opened_at),
        });

        self.last_send.insert((from, to), comm.logical_send);
        sample
    }

    /// Process any record; non-communication records are ignored
    pub fn observe_record(&mut self, record: &Record) -> Option<RoundTrip> {
        record.as_communication().and_then(|c| self.observe(c))
    }

    /// Number of directed pairs with a remembered send
    pub fn pending_pairs(&self) -> usize {
        self.last_send.len()
    }
}

/// Collect every round trip of a trace, in scan order
pub fn extract_round_trips<R: BufRead>(reader: R) -> Result<Vec<RoundTrip>, ParseError> {
    let mut extractor = RoundTripExtractor::new();
    let mut samples = Vec::new();

    for record in records(reader) {
        if let Some(sample) = extractor.observe_record(&record?) {
            samples.push(sample);
        }
    }

    debug!(
        "Matched {} round trips over {} directed pairs",
        samples.len(),
        extractor.pending_pairs()
    );

    Ok(samples)
}

/// Stream round trips straight into a CSV table, returning the row count
pub fn extract_to_writer<R: BufRead, W: Write>(reader: R, writer: W) -> Result<usize, ExtractError> {
    let mut extractor = RoundTripExtractor::new();
    let mut table = RttCsvWriter::new(writer)?;

    for record in records(reader) {
        if let Some(sample) = extractor.observe_record(&record?) {
            table.write_row(&sample)?;
        }
    }

    Ok(table.finish()?)
}

/// Extract the round-trip table of `input` into `output`
pub fn extract_file(input: &Path, output: &Path) -> Result<usize, ExtractError> {
    ensure_distinct(input, output)?;
    info!("Extracting round trips from {}", input.display());

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(create_output_file(output)?);
    let rows = extract_to_writer(reader, writer)?;

    info!("Wrote {} round trips to {}", rows, output.display());
    Ok(rows)
}
