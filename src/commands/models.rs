use std::path::PathBuf;

/// Arguments for the resync command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ResyncArgs {
    /// Trace to resynchronize
    pub input: PathBuf,

    /// Adjusted trace path (derived from input when None)
    pub output: Option<PathBuf>,

    /// Fine-tune offsets in RECORDER:DELTA form
    pub manual_offsets: Vec<String>,

    /// Optional TOML resync configuration
    pub config: Option<PathBuf>,
}

/// Arguments for the rtt command
#[derive(Debug, Clone, Default)]
pub struct RttArgs {
    /// Trace to scan (raw or adjusted)
    pub input: PathBuf,

    /// Round-trip table path (derived from input when None)
    pub output: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Round-trip CSV table
    pub input: PathBuf,

    /// Largest message size kept
    pub max_size: u64,

    /// Optional JSON report path
    pub json: Option<PathBuf>,

    /// Print the table to stdout
    pub print_table: bool,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            max_size: crate::utils::config::DEFAULT_SUMMARY_MAX_SIZE,
            json: None,
            print_table: true,
        }
    }
}
