//! Communication records: one directed message transfer between nodes.

use super::{adjust_nonzero, parse_field, Node, NODE_FIELDS};
use crate::utils::config::COMMUNICATION_KIND;
use crate::utils::error::ParseError;
use std::fmt;

const KIND: &str = "communication";
const FIELDS: usize = 2 * NODE_FIELDS + 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationRecord {
    pub sender: Node,
    pub logical_send: i64,
    pub physical_send: i64,
    pub receiver: Node,
    pub physical_receive: i64,
    pub logical_receive: i64,
    pub size: u64,
    pub tag: i64,
}

impl CommunicationRecord {
    /// Parse the fields following the kind tag
    pub fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        if fields.len() != FIELDS {
            return Err(super::malformed(
                KIND,
                format!("expected {} fields, got {}", FIELDS, fields.len()),
            ));
        }

        Ok(Self {
            sender: Node::from_fields(&fields[0..4], KIND)?,
            logical_send: parse_field(fields[4], KIND, "logical_send")?,
            physical_send: parse_field(fields[5], KIND, "physical_send")?,
            receiver: Node::from_fields(&fields[6..10], KIND)?,
            physical_receive: parse_field(fields[10], KIND, "physical_receive")?,
            logical_receive: parse_field(fields[11], KIND, "logical_receive")?,
            size: parse_field(fields[12], KIND, "size")?,
            tag: parse_field(fields[13], KIND, "tag")?,
        })
    }

    /// Shift the send side, the receive side, or both, depending on which
    /// node `recorder_id` stamped.
    pub fn adjust_for_recorder(&mut self, recorder_id: u64, offset: i64) {
        if self.sender.recorder_id == recorder_id {
            adjust_nonzero(&mut self.logical_send, offset);
            adjust_nonzero(&mut self.physical_send, offset);
        }
        if self.receiver.recorder_id == recorder_id {
            adjust_nonzero(&mut self.physical_receive, offset);
            adjust_nonzero(&mut self.logical_receive, offset);
        }
    }
}

impl fmt::Display for CommunicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}:{}:{}",
            COMMUNICATION_KIND,
            self.sender,
            self.logical_send,
            self.physical_send,
            self.receiver,
            self.physical_receive,
            self.logical_receive,
            self.size,
            self.tag
        )
    }
}
