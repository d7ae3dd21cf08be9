//! Configuration and constants for the CLI.

use crate::resync::{ManualOffset, MarkerSpec};
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Record kind tags as written in the trace
pub const STATE_KIND: u8 = 1;
pub const EVENT_KIND: u8 = 2;
pub const COMMUNICATION_KIND: u8 = 3;

// Lines starting with these bytes are headers/communicator definitions
pub const PASS_THROUGH_PREFIXES: &[u8] = b"#c";

// Collective-end marker emitted by every rank at the same logical instant
pub const DEFAULT_MARKER_EVENT_TYPE: u64 = 50_000_002;
pub const DEFAULT_MARKER_EVENT_VALUE: u64 = 0;

/// Recorder whose clock all other recorders are aligned to
pub const DEFAULT_REFERENCE_RECORDER: u64 = 1;

// Output file suffixes (replace the input extension)
pub const ADJUSTED_TRACE_SUFFIX: &str = "adjusted.prv";
pub const RTT_TABLE_SUFFIX: &str = "rtt.csv";

pub const RTT_CSV_HEADER: &str = "size_bytes,sender,receiver,duration_ns";

/// Largest message size kept by the latency summary (128 KiB)
pub const DEFAULT_SUMMARY_MAX_SIZE: u64 = 131_072;

/// Fraction cut from each tail for the trimmed mean
pub const TRIM_FRACTION: f64 = 0.05;

/// Resync settings loadable from a TOML file
///
/// ```toml
/// reference_recorder = 1
/// manual_offsets = ["2:50", "3:-10"]
///
/// [marker]
/// event_type = 50000002
/// event_value = 0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResyncConfig {
    #[serde(default = "default_reference_recorder")]
    pub reference_recorder: u64,

    #[serde(default)]
    pub marker: MarkerSpec,

    /// Fine-tune offsets in `RECORDER:DELTA` form
    #[serde(default)]
    pub manual_offsets: Vec<String>,
}

fn default_reference_recorder() -> u64 {
    DEFAULT_REFERENCE_RECORDER
}

impl Default for ResyncConfig {
    fn default() -> Self {
        Self {
            reference_recorder: DEFAULT_REFERENCE_RECORDER,
            marker: MarkerSpec::default(),
            manual_offsets: Vec::new(),
        }
    }
}

impl ResyncConfig {
    /// Parse the configured manual offsets
    pub fn parsed_offsets(&self) -> Result<Vec<ManualOffset>, ConfigError> {
        self.manual_offsets.iter().map(|s| s.parse()).collect()
    }
}

/// Load resync settings from a TOML file
pub fn load_resync_config(path: impl AsRef<Path>) -> Result<ResyncConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ResyncConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: ResyncConfig = toml::from_str("").unwrap();
        assert_eq!(config.reference_recorder, 1);
        assert_eq!(config.marker.event_type, DEFAULT_MARKER_EVENT_TYPE);
        assert!(config.manual_offsets.is_empty());
    }

    #[test]
    fn test_config_full_toml() {
        let config: ResyncConfig = toml::from_str(
            r#"
            reference_recorder = 3
            manual_offsets = ["2:50"]

            [marker]
            event_type = 42
            event_value = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.reference_recorder, 3);
        assert_eq!(config.marker, MarkerSpec::new(42, 7));
        let offsets = config.parsed_offsets().unwrap();
        assert_eq!(offsets, vec![ManualOffset { recorder: 2, delta: 50 }]);
    }

    #[test]
    fn test_config_rejects_bad_offset() {
        let config = ResyncConfig {
            manual_offsets: vec!["nope".to_string()],
            ..Default::default()
        };
        assert!(config.parsed_offsets().is_err());
    }
}
