//! Round-trip latency reconstruction.
//!
//! A message completing at node B is paired with the most recent send seen in
//! the opposite direction (B to A), giving one latency sample per exchange.
//! The scan is a single left-to-right pass; the trace is never sorted or held
//! in memory.

mod extractor;

pub use extractor::{
    extract_file, extract_round_trips, extract_to_writer, RoundTrip, RoundTripExtractor,
};
