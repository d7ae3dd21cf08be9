//! Per-size latency statistics over a round-trip table.
//!
//! Samples are filtered to `0 < size_bytes <= max_size`, grouped by size and
//! reduced to location and spread figures. The figures mirror what the
//! latency plots are built from, without drawing anything.

mod render;
mod summary;

pub use render::render_summary_table;
pub use summary::{quantile, summarize, trimmed_mean, LatencySummary, SizeStats};
