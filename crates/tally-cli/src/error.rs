//! CLI error types.

use std::path::PathBuf;

use tally_core::TallyError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A row of an input file could not be turned into a line item.
    #[error("{}, row {row}: {source}", .path.display())]
    InvalidRow {
        /// File being read.
        path: PathBuf,
        /// 1-based line number, counting the header.
        row: usize,
        /// Underlying validation error.
        #[source]
        source: TallyError,
    },

    /// An input file is malformed.
    #[error("Malformed input file {}: {reason}", .path.display())]
    MalformedFile {
        /// File being read.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
