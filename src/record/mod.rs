//! Typed model of the three record kinds found in a Paraver trace.
//!
//! Every record line is colon separated and starts with a kind tag:
//! - `1` state: `1:node:begin:end:state`
//! - `2` event: `2:node:time[:type:value]*`
//! - `3` communication: `3:sender:lsend:psend:receiver:precv:lrecv:size:tag`
//!
//! where `node` is `recorder:application:task:thread`.

mod communication;
mod event;
mod node;
mod state;

pub use communication::CommunicationRecord;
pub use event::{EventPair, EventRecord};
pub use node::{Node, NODE_FIELDS};
pub use state::StateRecord;

use crate::utils::config::{COMMUNICATION_KIND, EVENT_KIND, STATE_KIND};
use crate::utils::error::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One parsed trace record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    State(StateRecord),
    Event(EventRecord),
    Communication(CommunicationRecord),
}

impl Record {
    /// Leading integer tag of the record line
    pub fn kind_tag(&self) -> u8 {
        match self {
            Record::State(_) => STATE_KIND,
            Record::Event(_) => EVENT_KIND,
            Record::Communication(_) => COMMUNICATION_KIND,
        }
    }

    /// Primary ordering key of the record
    pub fn sort_time(&self) -> i64 {
        match self {
            Record::State(r) => r.begin_time,
            Record::Event(r) => r.time,
            Record::Communication(r) => r.logical_send,
        }
    }

    /// Shift every timestamp stamped by `recorder_id` by `offset`.
    ///
    /// Records that do not reference the recorder are left alone. Zero
    /// timestamps mean "not applicable" and are never shifted, with the
    /// exception of a state record's end time.
    pub fn adjust_for_recorder(&mut self, recorder_id: u64, offset: i64) {
        match self {
            Record::State(r) => r.adjust_for_recorder(recorder_id, offset),
            Record::Event(r) => r.adjust_for_recorder(recorder_id, offset),
            Record::Communication(r) => r.adjust_for_recorder(recorder_id, offset),
        }
    }

    /// Value-returning form of [`Record::adjust_for_recorder`]
    pub fn adjusted_for_recorder(mut self, recorder_id: u64, offset: i64) -> Self {
        self.adjust_for_recorder(recorder_id, offset);
        self
    }

    /// Canonical trace order: ascending sort time, then descending kind tag,
    /// so communications precede events precede states at the same instant.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.sort_time()
            .cmp(&other.sort_time())
            .then_with(|| other.kind_tag().cmp(&self.kind_tag()))
    }

    pub fn as_event(&self) -> Option<&EventRecord> {
        match self {
            Record::Event(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_communication(&self) -> Option<&CommunicationRecord> {
        match self {
            Record::Communication(r) => Some(r),
            _ => None,
        }
    }
}

impl FromStr for Record {
    type Err = ParseError;

    /// Parse a record line (without its line terminator).
    ///
    /// Errors carry line 0; callers that know the position use
    /// [`ParseError::at_line`].
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields: Vec<&str> = line.split(':').collect();
        let tag = fields.remove(0);

        match tag.parse::<u8>() {
            Ok(STATE_KIND) => StateRecord::from_fields(&fields).map(Record::State),
            Ok(EVENT_KIND) => EventRecord::from_fields(&fields).map(Record::Event),
            Ok(COMMUNICATION_KIND) => {
                CommunicationRecord::from_fields(&fields).map(Record::Communication)
            }
            _ => Err(ParseError::UnknownKind {
                line: 0,
                tag: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::State(r) => fmt::Display::fmt(r, f),
            Record::Event(r) => fmt::Display::fmt(r, f),
            Record::Communication(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Sort records into canonical order, keeping input order among equals
pub fn sort_canonical(records: &mut [Record]) {
    records.sort_by(Record::canonical_cmp);
}

fn parse_field<T: FromStr>(
    value: &str,
    kind: &'static str,
    field: &str,
) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| malformed(kind, format!("invalid {} '{}'", field, value)))
}

fn malformed(kind: &'static str, reason: String) -> ParseError {
    ParseError::MalformedRecord {
        line: 0,
        kind,
        reason,
    }
}

/// Add `offset` unless the timestamp is the zero sentinel
fn adjust_nonzero(time: &mut i64, offset: i64) {
    if *time != 0 {
        *time = time.saturating_add(offset);
    }
}
