// src/output/writer.rs

//! Atomic placement of the output artifact.
//!
//! The artifact is written to a named temporary file in the target's
//! directory and moved into place only after the whole export succeeded, so
//! a failed run never leaves a half-written file behind.

use crate::errors::AppError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A pending output artifact: a temp file plus the target it will become.
pub struct OutputFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl OutputFile {
    /// Creates the temporary file next to `target`.
    ///
    /// # Errors
    /// Fails with [`AppError::OutputUnwritable`] when the target's directory
    /// does not admit a new file.
    pub fn create(target: &Path) -> Result<OutputFile, AppError> {
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp = tempfile::Builder::new()
            .prefix(".dirdump-")
            .tempfile_in(dir)
            .map_err(|e| AppError::OutputUnwritable {
                path: target.display().to_string(),
                source: e,
            })?;
        Ok(OutputFile {
            temp,
            target: target.to_path_buf(),
        })
    }

    /// The underlying file handle to write the artifact through.
    pub fn as_file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Atomically moves the finished artifact into place.
    pub fn persist(self) -> Result<(), AppError> {
        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| AppError::OutputUnwritable {
                path: target.display().to_string(),
                source: e.error,
            })?;
        Ok(())
    }
}
