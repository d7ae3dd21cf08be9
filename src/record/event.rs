//! Event records: a node reporting one or more typed values at an instant.

use super::{adjust_nonzero, parse_field, Node, NODE_FIELDS};
use crate::utils::config::EVENT_KIND;
use crate::utils::error::ParseError;
use std::fmt;

const KIND: &str = "event";

/// One (type, value) pair of an event record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventPair {
    pub event_type: u64,
    pub event_value: u64,
}

impl EventPair {
    pub fn new(event_type: u64, event_value: u64) -> Self {
        Self {
            event_type,
            event_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub node: Node,
    pub time: i64,
    /// Pairs in file order
    pub events: Vec<EventPair>,
}

impl EventRecord {
    /// Parse the fields following the kind tag
    pub fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        if fields.len() < NODE_FIELDS + 1 {
            return Err(super::malformed(
                KIND,
                format!("expected at least {} fields, got {}", NODE_FIELDS + 1, fields.len()),
            ));
        }

        let pairs = &fields[NODE_FIELDS + 1..];
        if pairs.len() % 2 != 0 {
            return Err(super::malformed(
                KIND,
                format!("event type {} has no value", pairs[pairs.len() - 1]),
            ));
        }

        let events = pairs
            .chunks_exact(2)
            .map(|pair| -> Result<EventPair, ParseError> {
                Ok(EventPair {
                    event_type: parse_field(pair[0], KIND, "event_type")?,
                    event_value: parse_field(pair[1], KIND, "event_value")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            node: Node::from_fields(&fields[..NODE_FIELDS], KIND)?,
            time: parse_field(fields[NODE_FIELDS], KIND, "time")?,
            events,
        })
    }

    /// Whether any pair equals `(event_type, event_value)`
    pub fn contains_event(&self, event_type: u64, event_value: u64) -> bool {
        self.events
            .iter()
            .any(|e| e.event_type == event_type && e.event_value == event_value)
    }

    pub fn adjust_for_recorder(&mut self, recorder_id: u64, offset: i64) {
        if self.node.recorder_id == recorder_id {
            adjust_nonzero(&mut self.time, offset);
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", EVENT_KIND, self.node, self.time)?;
        for event in &self.events {
            write!(f, ":{}:{}", event.event_type, event.event_value)?;
        }
        Ok(())
    }
}
