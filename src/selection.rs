// src/selection.rs

//! The path-selection engine.
//!
//! Walks the tree rooted at the export root depth-first with sorted entries,
//! decides before every descent whether a directory can be pruned, and
//! produces the ordered list of root-relative file paths to export.
//!
//! Precedence: a file not matched by any ignore pattern is always selected.
//! A file excluded by the ignore set is selected only when the include set
//! reclaims it (a match on the file itself or on any ancestor directory).
//! A directory excluded by the ignore set is pruned unless the include set
//! reclaims it or could still match a path beneath it.

use crate::errors::AppError;
use crate::patterns::PatternSet;
use log::{debug, warn};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Traversal-side counters reported in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Directories excluded before descent; nothing beneath them was stat'd.
    pub dirs_pruned: usize,
    /// Entries skipped because they could not be read (permissions,
    /// symlink cycles).
    pub entries_unreadable: usize,
}

/// Selects the files to export beneath `root`.
///
/// Returns root-relative paths in deterministic traversal order (entries
/// sorted by file name within each directory) together with traversal
/// counters.
///
/// # Errors
/// Fails with [`AppError::RootNotFound`] when `root` is missing or not a
/// directory. Unreadable subtrees and symlink cycles are skipped with a
/// warning, never fatal.
pub fn select(
    root: &Path,
    ignore: &PatternSet,
    include: &PatternSet,
) -> Result<(Vec<PathBuf>, SelectionStats), AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    // The prune decision runs inside `filter_entry`, which only takes an
    // immutable closure borrow; count through a Cell.
    let pruned = Cell::new(0usize);
    let mut stats = SelectionStats::default();
    let mut selected = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    let entries = walker.into_iter().filter_entry(|entry| {
        if !entry.file_type().is_dir() {
            return true;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            return true;
        };
        if rel.as_os_str().is_empty() {
            return true; // the root itself
        }
        let rel = normalize(rel);
        if ignore.matches(&rel, true) != Some(true) {
            return true;
        }
        if is_reclaimed_dir(&rel, include) {
            debug!("descending into ignored directory '{}': include patterns reach inside it", rel);
            return true;
        }
        debug!("pruning ignored directory: {}", rel);
        pruned.set(pruned.get() + 1);
        false
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    warn!(
                        "skipping symlink cycle back to '{}'",
                        ancestor.display()
                    );
                } else {
                    warn!("skipping unreadable entry: {}", err);
                }
                stats.entries_unreadable += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            warn!(
                "entry '{}' is outside the export root, skipping",
                entry.path().display()
            );
            continue;
        };
        let rel_str = normalize(rel);
        if is_excluded(&rel_str, ignore) && !is_reclaimed_file(&rel_str, include) {
            debug!("skipping ignored file: {}", rel_str);
            continue;
        }
        selected.push(rel.to_path_buf());
    }

    stats.dirs_pruned = pruned.get();
    Ok((selected, stats))
}

/// Root-relative path with `/` separators, the form patterns match against.
fn normalize(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

/// Proper ancestor directories of `rel`, nearest first
/// (`a/b/c.txt` yields `a/b`, then `a`).
fn ancestor_dirs(rel: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent_of(rel), |dir| parent_of(dir))
}

fn parent_of(rel: &str) -> Option<&str> {
    rel.rfind('/').map(|idx| &rel[..idx])
}

/// A file is excluded when the ignore set decides so for the path itself,
/// or, absent a direct decision, for its nearest decided ancestor directory.
fn is_excluded(rel: &str, ignore: &PatternSet) -> bool {
    match ignore.matches(rel, false) {
        Some(decision) => decision,
        None => ancestor_dirs(rel)
            .find_map(|dir| ignore.matches(dir, true))
            .unwrap_or(false),
    }
}

/// A file is reclaimed when an include pattern matches it or any of its
/// ancestor directories.
fn is_reclaimed_file(rel: &str, include: &PatternSet) -> bool {
    include.matches(rel, false) == Some(true)
        || ancestor_dirs(rel).any(|dir| include.matches(dir, true) == Some(true))
}

/// A directory is reclaimed for traversal purposes when an include pattern
/// matches it, matches an ancestor, or could still match a path beneath it.
fn is_reclaimed_dir(rel: &str, include: &PatternSet) -> bool {
    include.matches(rel, true) == Some(true)
        || ancestor_dirs(rel).any(|dir| include.matches(dir, true) == Some(true))
        || include.could_match_within(rel)
}
