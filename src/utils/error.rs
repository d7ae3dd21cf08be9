//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing trace lines
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Line {line}: unknown record kind tag '{tag}'")]
    UnknownKind { line: usize, tag: String },

    #[error("Line {line}: malformed {kind} record: {reason}")]
    MalformedRecord {
        line: usize,
        kind: &'static str,
        reason: String,
    },

    #[error("Line {line}: empty line is not a valid trace line")]
    EmptyLine { line: usize },

    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Attach a line number to an error produced without one
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ParseError::UnknownKind { tag, .. } => ParseError::UnknownKind { line, tag },
            ParseError::MalformedRecord { kind, reason, .. } => {
                ParseError::MalformedRecord { line, kind, reason }
            }
            ParseError::EmptyLine { .. } => ParseError::EmptyLine { line },
            other => other,
        }
    }
}

/// Errors that can occur during clock resynchronization
#[derive(Error, Debug)]
pub enum ResyncError {
    #[error("Reference recorder {0} never emitted the synchronization marker")]
    MissingReferenceMarker(u64),

    #[error("Trace parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid resync configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write adjusted trace: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during round-trip extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Trace parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to write round-trip table: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid manual offset '{0}': expected RECORDER:DELTA")]
    InvalidOffset(String),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
