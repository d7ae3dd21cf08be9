//! Round-trip table in comma-separated form.
//!
//! Header `size_bytes,sender,receiver,duration_ns`, one row per sample, in
//! scan order.

use crate::rtt::RoundTrip;
use crate::utils::config::RTT_CSV_HEADER;
use crate::utils::error::OutputError;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Incremental CSV writer; the header is written on construction
pub struct RttCsvWriter<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> RttCsvWriter<W> {
    pub fn new(mut writer: W) -> Result<Self, OutputError> {
        writeln!(writer, "{}", RTT_CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &RoundTrip) -> Result<(), OutputError> {
        writeln!(
            self.writer,
            "{},{},{},{}",
            row.size_bytes, row.sender, row.receiver, row.duration_ns
        )?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and return the number of data rows written
    pub fn finish(mut self) -> Result<usize, OutputError> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}

/// Read a round-trip table back, validating the header
pub fn read_round_trips<R: BufRead>(reader: R) -> Result<Vec<RoundTrip>, OutputError> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim() != RTT_CSV_HEADER {
        return Err(OutputError::MalformedRow {
            row: 1,
            reason: format!("expected header '{}', got '{}'", RTT_CSV_HEADER, header.trim()),
        });
    }

    let mut samples = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_row(line.trim(), index + 2)?);
    }

    Ok(samples)
}

fn parse_row(line: &str, row: usize) -> Result<RoundTrip, OutputError> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() != 4 {
        return Err(OutputError::MalformedRow {
            row,
            reason: format!("expected 4 columns, got {}", cols.len()),
        });
    }

    Ok(RoundTrip {
        size_bytes: column(cols[0], row, "size_bytes")?,
        sender: column(cols[1], row, "sender")?,
        receiver: column(cols[2], row, "receiver")?,
        duration_ns: column(cols[3], row, "duration_ns")?,
    })
}

fn column<T: FromStr>(value: &str, row: usize, name: &str) -> Result<T, OutputError> {
    value.trim().parse().map_err(|_| OutputError::MalformedRow {
        row,
        reason: format!("invalid {} '{}'", name, value),
    })
}
