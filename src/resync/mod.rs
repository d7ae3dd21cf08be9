//! Clock resynchronization across independently clocked recorders.
//!
//! Two passes over the trace:
//! 1. find the first synchronization marker of every recorder and derive
//!    offsets relative to the reference recorder
//! 2. shift every record by its recorders' offsets and re-sort the trace
//!
//! # Example
//! ```ignore
//! use prv_sync::resync::{resync_file, ManualOffset};
//! use prv_sync::utils::config::ResyncConfig;
//!
//! let manual: Vec<ManualOffset> = vec!["2:50".parse()?];
//! let report = resync_file(input, output, &ResyncConfig::default(), &manual)?;
//! ```

mod engine;
mod offsets;

pub use engine::{adjust_trace, resync_file, AdjustStats, ResyncReport};
pub use offsets::{
    compute_offsets, scan_markers, ClockOffsets, ManualOffset, MarkerScan, MarkerSpec,
};
