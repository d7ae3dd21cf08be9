//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod resync;
pub mod rtt;
pub mod summary;
pub mod utils;

// Re-export main command functions
pub use models::{ResyncArgs, RttArgs, SummaryArgs};
pub use resync::{execute_resync, parse_manual_offsets, validate_resync_args};
pub use rtt::{execute_rtt, validate_rtt_args};
pub use summary::{execute_summary, validate_summary_args};
pub use utils::{display_format, display_version, inspect_trace, validate_trace_file, TraceInspection};
