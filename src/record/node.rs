//! Node identity embedded in every trace record.

use crate::utils::error::ParseError;
use std::fmt;

/// Number of colon-separated fields a node occupies
pub const NODE_FIELDS: usize = 4;

/// A (recorder, application, task, thread) identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Clock source that stamped the record's times
    pub recorder_id: u64,
    pub application_id: u64,
    pub task_id: u64,
    pub thread_id: u64,
}

impl Node {
    pub fn new(recorder_id: u64, application_id: u64, task_id: u64, thread_id: u64) -> Self {
        Self {
            recorder_id,
            application_id,
            task_id,
            thread_id,
        }
    }

    /// Build a node from exactly four fields
    pub(crate) fn from_fields(fields: &[&str], kind: &'static str) -> Result<Self, ParseError> {
        if fields.len() != NODE_FIELDS {
            return Err(super::malformed(
                kind,
                format!("node needs {} fields, got {}", NODE_FIELDS, fields.len()),
            ));
        }

        Ok(Self {
            recorder_id: super::parse_field(fields[0], kind, "recorder_id")?,
            application_id: super::parse_field(fields[1], kind, "application_id")?,
            task_id: super::parse_field(fields[2], kind, "task_id")?,
            thread_id: super::parse_field(fields[3], kind, "thread_id")?,
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.recorder_id, self.application_id, self.task_id, self.thread_id
        )
    }
}
