//! Error types for bookbind operations.
//!
//! Failures while binding are I/O failures grouped under [`IoError`];
//! bad command-line input is a [`CommandError`]. Both are wrapped by the
//! crate-level [`Error`].

use thiserror::Error;

/// Result type alias for bookbind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bookbind.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (reading chapters, writing the output document).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Short machine-readable name of the error, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io(IoError::FileNotFound { .. }) => "file_not_found",
            Self::Io(IoError::ReadFailed { .. }) => "read_failed",
            Self::Io(IoError::OutputOpenFailed { .. }) => "output_open_failed",
            Self::Io(IoError::WriteFailed { .. }) => "write_failed",
            Self::Io(IoError::MmapFailed { .. }) => "mmap_failed",
            Self::Command(_) => "command",
        }
    }
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Input document does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Input document exists but could not be opened or read.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Output document could not be created or truncated.
    #[error("failed to open output: {path}: {reason}")]
    OutputOpenFailed {
        /// Path to the output document.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Writing or flushing the output document failed.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
