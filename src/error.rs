//! Error types for intstream-lab operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in intstream-lab operations.
///
/// An empty sequence is never an error; aggregates that are undefined on
/// empty input return `None` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The input sequence was missing.
    #[error("Invalid input: input sequence is missing")]
    InvalidInput,

    /// A token in textual input was not a 32-bit integer.
    #[error("Invalid value '{token}': expected a 32-bit integer")]
    ParseValue {
        /// Offending token.
        token: String,
    },

    /// Configuration file could not be read.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration could not be serialized.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
