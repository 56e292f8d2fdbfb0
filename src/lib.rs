//! `dirdump` is a library and command-line tool that exports the textual
//! contents of a directory tree into a single annotated file.
//!
//! It walks a root directory, skips paths matched by a gitignore-style
//! ignore file unless an include-pattern file reclaims them, and writes the
//! remaining files under `===path===` headers, preceded by a tree rendering
//! of the exported structure. Jupyter notebook execution outputs are
//! stripped by default. The result is a single reproducible artifact suited
//! to feeding a codebase to tools that want one document, such as LLMs.
//!
//! The pipeline has three stages:
//! 1. **Select**: decide, for every file under the root, whether it is
//!    exported, pruning ignored directories before descent.
//! 2. **Load**: read each selected file, substituting a placeholder for
//!    binary or unreadable content.
//! 3. **Write**: serialize tree and entries to the output target, placed
//!    atomically on success.
//!
//! # Example: Library Usage
//!
//! ```
//! use dirdump::{export, Config};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join("a.txt"), "Hello").unwrap();
//! fs::write(temp.path().join("b.log"), "noise").unwrap();
//! fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
//!
//! let config = Config {
//!     root_dir: temp.path().to_path_buf(),
//!     output_file: temp.path().join("export.txt"),
//!     ignore_file: Some(temp.path().join(".gitignore")),
//!     ..Config::default()
//! };
//!
//! let summary = export(&config).unwrap();
//! assert_eq!(summary.files_exported, 2); // a.txt and .gitignore itself
//!
//! let artifact = fs::read_to_string(temp.path().join("export.txt")).unwrap();
//! assert!(artifact.contains("===a.txt==="));
//! assert!(!artifact.contains("===b.log==="));
//! ```

pub mod cli;
pub mod constants;
pub mod content;
pub mod errors;
pub mod output;
pub mod patterns;
pub mod selection;

pub use errors::AppError;
pub use patterns::{Pattern, PatternSet};

use crate::constants::{CONTENTS_TITLE, STRUCTURE_TITLE};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Settings for one export run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to export from.
    pub root_dir: PathBuf,
    /// Where the artifact is written.
    pub output_file: PathBuf,
    /// Ignore-pattern file (gitignore syntax). `None` or a missing file
    /// means no ignore rules.
    pub ignore_file: Option<PathBuf>,
    /// Include-pattern file; its patterns reclaim paths the ignore file
    /// excluded. `None` or a missing file means no include rules.
    pub include_file: Option<PathBuf>,
    /// Strip execution outputs from `.ipynb` files.
    pub strip_notebook_outputs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_dir: PathBuf::from("."),
            output_file: PathBuf::from("output.txt"),
            ignore_file: Some(PathBuf::from(".gitignore")),
            include_file: None,
            strip_notebook_outputs: true,
        }
    }
}

/// Counters describing a completed export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries written to the artifact, placeholders included.
    pub files_exported: usize,
    /// Entries represented by the binary/unreadable placeholder.
    pub files_binary: usize,
    /// Directories excluded before descent.
    pub dirs_pruned: usize,
    /// Entries skipped because they could not be read.
    pub entries_unreadable: usize,
}

/// Runs the whole export pipeline: select, load, write.
///
/// Per-file failures are absorbed into placeholders and summary counts; the
/// only fatal conditions are a missing root and an unwritable output
/// target, in which case nothing is written.
pub fn export(config: &Config) -> Result<RunSummary, AppError> {
    let ignore = PatternSet::from_file(config.ignore_file.as_deref());
    let include = PatternSet::from_file(config.include_file.as_deref());
    debug!(
        "export from '{}': {} ignore patterns, {} include patterns",
        config.root_dir.display(),
        ignore.len(),
        include.len()
    );

    let (mut selected, stats) = selection::select(&config.root_dir, &ignore, &include)?;

    // The artifact we are about to (re)write must never export itself.
    if let Some(output_rel) = output_relative_to_root(&config.root_dir, &config.output_file) {
        selected.retain(|path| path != &output_rel);
    }

    let mut summary = RunSummary {
        dirs_pruned: stats.dirs_pruned,
        entries_unreadable: stats.entries_unreadable,
        ..RunSummary::default()
    };

    let mut out = output::OutputFile::create(&config.output_file)?;
    {
        let mut writer = BufWriter::new(out.as_file_mut());
        write_artifact(&mut writer, config, &selected, &mut summary).map_err(|e| {
            AppError::OutputUnwritable {
                path: config.output_file.display().to_string(),
                source: e,
            }
        })?;
    }
    out.persist()?;

    info!(
        "exported {} files to '{}' ({} binary/unreadable, {} directories pruned)",
        summary.files_exported,
        config.output_file.display(),
        summary.files_binary,
        summary.dirs_pruned
    );
    Ok(summary)
}

fn write_artifact(
    writer: &mut dyn Write,
    config: &Config,
    selected: &[PathBuf],
    summary: &mut RunSummary,
) -> std::io::Result<()> {
    output::write_section_header(writer, STRUCTURE_TITLE)?;
    writer.write_all(output::render_tree(selected).as_bytes())?;
    writeln!(writer)?;

    output::write_section_header(writer, CONTENTS_TITLE)?;
    for path in selected {
        let entry = content::load(&config.root_dir, path, config.strip_notebook_outputs);
        if entry.is_placeholder {
            summary.files_binary += 1;
        }
        output::write_entry(writer, &entry)?;
        summary.files_exported += 1;
    }
    writer.flush()
}

/// Resolves the output target to a root-relative path when it lives under
/// the root, so selection can drop it. The target may not exist yet, so its
/// parent is canonicalized instead.
fn output_relative_to_root(root: &Path, output: &Path) -> Option<PathBuf> {
    let root = root.canonicalize().ok()?;
    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let absolute = parent.canonicalize().ok()?.join(output.file_name()?);
    absolute.strip_prefix(&root).ok().map(Path::to_path_buf)
}
