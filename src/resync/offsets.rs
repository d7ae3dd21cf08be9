//! Marker discovery and per-recorder clock offset computation.

use crate::parser::records;
use crate::record::{EventRecord, Record};
use crate::utils::config::{DEFAULT_MARKER_EVENT_TYPE, DEFAULT_MARKER_EVENT_VALUE};
use crate::utils::error::{ConfigError, ParseError, ResyncError};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::str::FromStr;

/// Event pair every recorder emits at the same logical instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerSpec {
    pub event_type: u64,
    pub event_value: u64,
}

impl MarkerSpec {
    pub fn new(event_type: u64, event_value: u64) -> Self {
        Self {
            event_type,
            event_value,
        }
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.contains_event(self.event_type, self.event_value)
    }
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_EVENT_TYPE, DEFAULT_MARKER_EVENT_VALUE)
    }
}

/// Result of the marker discovery pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerScan {
    /// First marker timestamp per recorder
    pub marker_times: BTreeMap<u64, i64>,
    /// Every recorder id referenced by any record
    pub recorders: BTreeSet<u64>,
}

impl MarkerScan {
    /// Feed one record into the scan
    pub fn observe(&mut self, record: &Record, marker: &MarkerSpec) {
        match record {
            Record::State(r) => {
                self.recorders.insert(r.node.recorder_id);
            }
            Record::Event(r) => {
                self.recorders.insert(r.node.recorder_id);
                if marker.matches(r) {
                    // first occurrence wins
                    self.marker_times.entry(r.node.recorder_id).or_insert(r.time);
                }
            }
            Record::Communication(r) => {
                self.recorders.insert(r.sender.recorder_id);
                self.recorders.insert(r.receiver.recorder_id);
            }
        }
    }

    /// Recorders that appear in the trace but never emitted the marker
    pub fn unsynchronized(&self) -> Vec<u64> {
        self.recorders
            .iter()
            .filter(|r| !self.marker_times.contains_key(r))
            .copied()
            .collect()
    }
}

/// First pass: find each recorder's first synchronization marker
pub fn scan_markers<R: BufRead>(reader: R, marker: &MarkerSpec) -> Result<MarkerScan, ParseError> {
    let mut scan = MarkerScan::default();
    for record in records(reader) {
        scan.observe(&record?, marker);
    }

    debug!(
        "Marker scan: {} of {} recorders emitted {}:{}",
        scan.marker_times.len(),
        scan.recorders.len(),
        marker.event_type,
        marker.event_value
    );

    Ok(scan)
}

/// Operator-supplied fine-tune for one recorder, written `RECORDER:DELTA`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualOffset {
    pub recorder: u64,
    pub delta: i64,
}

impl FromStr for ManualOffset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOffset(s.to_string());
        let (recorder, delta) = s.split_once(':').ok_or_else(invalid)?;

        Ok(Self {
            recorder: recorder.trim().parse().map_err(|_| invalid())?,
            delta: delta.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Final offset per recorder, added to every timestamp it stamped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockOffsets {
    offsets: BTreeMap<u64, i64>,
}

impl ClockOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, recorder: u64) -> Option<i64> {
        self.offsets.get(&recorder).copied()
    }

    /// Add `delta` on top of the recorder's current offset (zero if none)
    pub fn add(&mut self, recorder: u64, delta: i64) {
        let entry = self.offsets.entry(recorder).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.offsets.iter().map(|(r, o)| (*r, *o))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Apply every offset to one record
    pub fn apply(&self, record: &mut Record) {
        for (recorder, offset) in self.iter() {
            record.adjust_for_recorder(recorder, offset);
        }
    }
}

impl FromIterator<(u64, i64)> for ClockOffsets {
    fn from_iter<I: IntoIterator<Item = (u64, i64)>>(iter: I) -> Self {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }
}

/// Align every recorder with a marker to `reference`, then layer manual
/// fine-tunes on top.
///
/// # Errors
/// * `ResyncError::MissingReferenceMarker` - the reference recorder has no
///   marker, so no offset is defined
pub fn compute_offsets(
    scan: &MarkerScan,
    reference: u64,
    manual: &[ManualOffset],
) -> Result<ClockOffsets, ResyncError> {
    let reference_time = scan
        .marker_times
        .get(&reference)
        .copied()
        .ok_or(ResyncError::MissingReferenceMarker(reference))?;

    let mut offsets: ClockOffsets = scan
        .marker_times
        .iter()
        .map(|(recorder, time)| (*recorder, reference_time.saturating_sub(*time)))
        .collect();

    for recorder in scan.unsynchronized() {
        warn!("Recorder {} never emitted the marker, no automatic offset", recorder);
    }

    for m in manual {
        if offsets.get(m.recorder).is_none() {
            info!("Manual offset for recorder {} applied on top of zero", m.recorder);
        }
        offsets.add(m.recorder, m.delta);
    }

    Ok(offsets)
}
