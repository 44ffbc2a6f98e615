//! Error types for the LAMMPS log parser library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for log parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing a log or building a [`LogRecord`](crate::LogRecord).
#[derive(Debug, Error)]
pub enum Error {
    /// The input path could not be opened
    #[error("Cannot open log file {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading an opened file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log text does not describe a readable thermo table
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// An average was requested for a column with no samples
    #[error("Column '{0}' has no samples to average")]
    EmptyColumn(String),

    /// Columns and averages that do not form a valid record
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The specific way a log failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `run N` directive before the end of the file, so no data row was ever recognised.
    #[error("no 'run' directive found before the thermo table")]
    MissingRunLength,

    #[error("no 'thermo' directive found before the thermo table")]
    MissingSaveFrequency,

    #[error("'thermo 0' gives no sampling interval to size the table with")]
    ZeroSaveFrequency,

    #[error("no 'thermo_style' directive naming the output columns")]
    MissingSchema,

    /// A row inside the table extent held a token that is not a number.
    #[error("line {line}: '{token}' is not a number")]
    MalformedRow { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Fewer data rows than `run / thermo + 1` before the end of the file.
    #[error("expected {expected} data rows, only {available} available")]
    RowCountMismatch { expected: usize, available: usize },
}
