use crate::parser::{TraceLine, TraceReader};
use crate::record::Record;
use crate::resync::{MarkerScan, MarkerSpec};
use crate::utils::config::{RTT_CSV_HEADER, SCHEMA_VERSION};
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Line counts and marker coverage of a trace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceInspection {
    pub pass_through_lines: usize,
    pub states: usize,
    pub events: usize,
    pub communications: usize,
    pub markers: MarkerScan,
}

impl TraceInspection {
    pub fn total_records(&self) -> usize {
        self.states + self.events + self.communications
    }
}

/// Parse a whole trace, counting line kinds and marker coverage
pub fn inspect_trace<R: BufRead>(
    reader: R,
    marker: &MarkerSpec,
) -> Result<TraceInspection, ParseError> {
    let mut inspection = TraceInspection::default();

    for item in TraceReader::new(reader) {
        match item? {
            (_, TraceLine::PassThrough(_)) => inspection.pass_through_lines += 1,
            (_, TraceLine::Record(record)) => {
                match &record {
                    Record::State(_) => inspection.states += 1,
                    Record::Event(_) => inspection.events += 1,
                    Record::Communication(_) => inspection.communications += 1,
                }
                inspection.markers.observe(&record, marker);
            }
        }
    }

    Ok(inspection)
}

/// Validate a trace file
pub fn validate_trace_file(file_path: PathBuf) -> Result<TraceInspection> {
    println!("Validating trace: {}", file_path.display());

    let file = File::open(&file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let inspection = inspect_trace(BufReader::new(file), &MarkerSpec::default())?;

    println!("✓ Valid trace");
    println!("  Pass-through lines: {}", inspection.pass_through_lines);
    println!("  Records: {}", inspection.total_records());
    println!("    state:         {}", inspection.states);
    println!("    event:         {}", inspection.events);
    println!("    communication: {}", inspection.communications);
    println!("  Recorders: {}", inspection.markers.recorders.len());
    println!(
        "  With sync marker: {:?}",
        inspection.markers.marker_times.keys().collect::<Vec<_>>()
    );

    Ok(inspection)
}

/// Display trace and table format information
pub fn display_format(show_details: bool) {
    println!("Paraver record formats (colon separated)");
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("  node           recorder:application:task:thread");
        println!("  1 state        1:node:begin:end:state");
        println!("  2 event        2:node:time[:type:value]*");
        println!("  3 communication 3:node:lsend:psend:node:precv:lrecv:size:tag");
        println!("  lines starting with '#' or 'c' are copied verbatim");
        println!();
        println!("Round-trip table header: {}", RTT_CSV_HEADER);
    } else {
        println!("Use --show for detailed format information");
    }
}

/// Display version information
pub fn display_version() {
    println!("prv-sync v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Clock resynchronization and round-trip latency extraction for Paraver traces.");
}
