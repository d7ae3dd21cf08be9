//! prv-sync
//!
//! Clock resynchronization and round-trip latency extraction for
//! Paraver traces recorded on independently clocked nodes.
//!
//! This crate provides the core implementation for the
//! `prv-sync` CLI tool:
//! - [`record`] typed model of state, event and communication records
//! - [`parser`] line-oriented trace reader
//! - [`resync`] marker-based clock offset computation and trace re-sorting
//! - [`rtt`] round-trip latency reconstruction
//! - [`stats`] per-size latency statistics
//!
//! ## Getting Started
//!
//! ```bash
//! prv-sync resync trace.prv 2:50
//! prv-sync rtt trace.adjusted.prv
//! prv-sync summary trace.adjusted.rtt.csv
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod record;
pub mod resync;
pub mod rtt;
pub mod stats;
pub mod utils;
