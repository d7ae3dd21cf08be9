//! State records: a node spending an interval in a given state.

use super::{adjust_nonzero, parse_field, Node, NODE_FIELDS};
use crate::utils::config::STATE_KIND;
use crate::utils::error::ParseError;
use std::fmt;

const KIND: &str = "state";
const FIELDS: usize = NODE_FIELDS + 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub node: Node,
    pub begin_time: i64,
    pub end_time: i64,
    pub state_id: u64,
}

impl StateRecord {
    /// Parse the fields following the kind tag
    pub fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        if fields.len() != FIELDS {
            return Err(super::malformed(
                KIND,
                format!("expected {} fields, got {}", FIELDS, fields.len()),
            ));
        }

        Ok(Self {
            node: Node::from_fields(&fields[..NODE_FIELDS], KIND)?,
            begin_time: parse_field(fields[4], KIND, "begin_time")?,
            end_time: parse_field(fields[5], KIND, "end_time")?,
            state_id: parse_field(fields[6], KIND, "state_id")?,
        })
    }

    /// Shift this record's times if it belongs to `recorder_id`.
    ///
    /// A zero `begin_time` marks a trace-boundary state and stays put, but
    /// `end_time` moves regardless of its value.
    pub fn adjust_for_recorder(&mut self, recorder_id: u64, offset: i64) {
        if self.node.recorder_id == recorder_id {
            adjust_nonzero(&mut self.begin_time, offset);
            // end_time has no zero sentinel
            self.end_time = self.end_time.saturating_add(offset);
        }
    }
}

impl fmt::Display for StateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            STATE_KIND, self.node, self.begin_time, self.end_time, self.state_id
        )
    }
}
