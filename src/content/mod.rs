// src/content/mod.rs

//! Reads selected files and resolves their exportable text.
//!
//! Loading never fails for an individual file: binary or unreadable content
//! degrades to a fixed placeholder and the run continues.

mod notebook;

pub use notebook::strip_notebook_outputs;

use crate::constants::{BINARY_PLACEHOLDER, DETECTION_SAMPLE_SIZE, NOTEBOOK_EXTENSION};
use crate::errors::io_error_with_path;
use content_inspector::ContentType;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// One exported file: its root-relative path and resolved text.
#[derive(Debug, Clone)]
pub struct ExportedEntry {
    /// Path relative to the export root, used for the section header.
    pub relative_path: PathBuf,
    /// The resolved text, or [`BINARY_PLACEHOLDER`] when the file could not
    /// be decoded.
    pub content: String,
    /// Whether `content` is the placeholder rather than real file text.
    pub is_placeholder: bool,
}

/// Loads one selected file.
///
/// Binary detection samples the leading bytes; decodable content goes
/// through a lossy UTF-8 decode so a stray invalid sequence deep in an
/// otherwise textual file does not discard it. Notebook files are run
/// through the output-stripping transform when requested, falling back to
/// the raw text if they do not parse.
pub fn load(root: &Path, relative_path: &Path, strip_outputs: bool) -> ExportedEntry {
    let absolute = root.join(relative_path);
    let bytes = match fs::read(&absolute) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{}", io_error_with_path(e, &absolute));
            return placeholder(relative_path);
        }
    };

    let sample = &bytes[..bytes.len().min(DETECTION_SAMPLE_SIZE)];
    if !is_likely_text(sample) {
        return placeholder(relative_path);
    }

    let text = String::from_utf8_lossy(&bytes).into_owned();
    let content = if strip_outputs && has_notebook_extension(relative_path) {
        match strip_notebook_outputs(&text) {
            Ok(stripped) => stripped,
            Err(e) => {
                warn!(
                    "could not parse notebook '{}', exporting as plain text: {}",
                    relative_path.display(),
                    e
                );
                text
            }
        }
    } else {
        text
    };

    ExportedEntry {
        relative_path: relative_path.to_path_buf(),
        content,
        is_placeholder: false,
    }
}

fn placeholder(relative_path: &Path) -> ExportedEntry {
    ExportedEntry {
        relative_path: relative_path.to_path_buf(),
        content: BINARY_PLACEHOLDER.to_string(),
        is_placeholder: true,
    }
}

fn has_notebook_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(NOTEBOOK_EXTENSION)
}

/// Heuristic text check on a leading byte sample.
pub fn is_likely_text(sample: &[u8]) -> bool {
    match content_inspector::inspect(sample) {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => match std::str::from_utf8(sample) {
            Ok(_) => true,
            // A multi-byte character cut off at the sample boundary is not
            // evidence of binary content.
            Err(e) => e.error_len().is_none(),
        },
        _ => false,
    }
}
