//! Defines application-specific error types.
//!
//! Only conditions that prevent producing any coherent output are fatal
//! (`RootNotFound`, `OutputUnwritable`). Everything else is absorbed by the
//! caller, logged, and reflected in the run summary.

use thiserror::Error;

/// Application-specific errors used throughout `dirdump`.
#[derive(Error, Debug)]
pub enum AppError {
    /// The export root does not exist or is not a directory. Fatal; nothing
    /// is written.
    #[error("root directory not found: '{path}'")]
    RootNotFound {
        /// The root path as given by the caller.
        path: String,
    },

    /// The output target could not be created or replaced. Fatal; no partial
    /// artifact is left behind.
    #[error("cannot write output to '{path}': {source}")]
    OutputUnwritable {
        /// The output target path.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A pattern line could not be compiled (e.g. an unbalanced bracket
    /// expression). Non-fatal: the offending line is skipped and the rest of
    /// the pattern file is still compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The raw pattern line.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },

    /// Error occurring during file or directory access (read, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Helper to create an `AppError::IoError` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}
