// src/patterns.rs

//! Gitignore-style pattern compilation and matching.
//!
//! A [`PatternSet`] is an ordered list of compiled [`Pattern`]s. Matching is
//! an explicit fold over the list: every pattern that matches a candidate
//! toggles the outcome to `Some(!negated)`, and the final state wins ("last
//! match wins"). `None` means no pattern matched and the caller applies its
//! own default.

use crate::errors::AppError;
use glob::{MatchOptions, Pattern as Glob};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Glob options for gitignore-style matching: `*` and `?` never cross a
/// path separator; `**` components do.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// One path component of an anchored pattern, used to decide whether a
/// pattern could still match something beneath a directory.
#[derive(Debug, Clone)]
enum Component {
    /// A `**` component, matching any number of directories.
    Recursive,
    Glob(Glob),
}

/// A single compiled glob-style rule. Immutable once compiled.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The raw pattern line, kept for diagnostics.
    raw: String,
    /// Compiled glob for the whole pattern body.
    glob: Glob,
    /// `!`-prefixed: a match re-includes instead of excluding.
    negated: bool,
    /// Trailing `/`: matches directories only.
    dir_only: bool,
    /// Contains (or started with) `/`: matched against the root-relative
    /// path instead of the base name.
    anchored: bool,
    /// Per-component globs, populated for anchored patterns only.
    components: Vec<Component>,
}

impl Pattern {
    /// Compiles a single pattern line.
    ///
    /// The line must already be trimmed and non-empty; comment handling
    /// lives in [`PatternSet::compile`].
    pub fn parse(line: &str) -> Result<Pattern, AppError> {
        let raw = line.to_string();
        let invalid = |reason: String| AppError::InvalidPattern {
            pattern: raw.clone(),
            reason,
        };

        let mut body = line;
        let negated = body.starts_with('!');
        if negated {
            body = &body[1..];
        }
        let dir_only = body.ends_with('/');
        if dir_only {
            body = &body[..body.len() - 1];
        }
        // A slash anywhere (leading or interior) anchors the pattern to the
        // export root; otherwise it matches base names at any depth.
        let anchored = body.contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);
        if body.is_empty() {
            return Err(invalid("empty pattern".to_string()));
        }

        let glob = Glob::new(body).map_err(|e| invalid(e.to_string()))?;
        let components = if anchored {
            body.split('/')
                .map(|comp| {
                    if comp == "**" {
                        Ok(Component::Recursive)
                    } else {
                        Glob::new(comp).map(Component::Glob)
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| invalid(e.to_string()))?
        } else {
            Vec::new()
        };

        Ok(Pattern {
            raw,
            glob,
            negated,
            dir_only,
            anchored,
            components,
        })
    }

    /// The raw pattern line this was compiled from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether a match re-includes instead of excluding.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Tests one candidate. `rel` is the `/`-separated path relative to the
    /// export root; `is_dir` says whether the candidate is a directory.
    pub fn matches(&self, rel: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            self.glob.matches_with(rel, match_options())
        } else {
            let base = rel.rsplit('/').next().unwrap_or(rel);
            self.glob.matches_with(base, match_options())
        }
    }

    /// Whether this pattern could still match a path strictly below the
    /// directory `rel`. Used by the selector to avoid pruning a directory
    /// that an include pattern may reclaim something inside of.
    pub fn could_match_within(&self, rel: &str) -> bool {
        if !self.anchored {
            // Base-name patterns apply at every depth.
            return true;
        }
        for (i, dir) in rel.split('/').enumerate() {
            match self.components.get(i) {
                None => return false,
                Some(Component::Recursive) => return true,
                Some(Component::Glob(glob)) => {
                    if !glob.matches_with(dir, match_options()) {
                        return false;
                    }
                }
            }
        }
        // Every directory component matched; the pattern reaches deeper
        // only if it has components left over.
        rel.split('/').count() < self.components.len()
    }
}

/// An ordered sequence of compiled patterns. Built once per export run,
/// read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles a pattern set from raw lines. Blank lines and `#` comments
    /// are skipped; lines that fail to compile are logged and skipped so a
    /// single bad line never aborts the export.
    pub fn compile<I, S>(lines: I) -> PatternSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match Pattern::parse(line) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!("skipping pattern line: {}", e),
            }
        }
        PatternSet { patterns }
    }

    /// Loads a pattern set from a file. A missing or unreadable file yields
    /// an empty set rather than an error.
    pub fn from_file(path: Option<&Path>) -> PatternSet {
        let Some(path) = path else {
            return PatternSet::default();
        };
        match fs::read_to_string(path) {
            Ok(text) => {
                let set = Self::compile(text.lines());
                debug!(
                    "compiled {} patterns from '{}'",
                    set.len(),
                    path.display()
                );
                set
            }
            Err(e) => {
                debug!(
                    "pattern file '{}' not readable ({}), using empty set",
                    path.display(),
                    e
                );
                PatternSet::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Evaluates all patterns in order against one candidate.
    ///
    /// Returns `Some(true)` when the last matching pattern was positive,
    /// `Some(false)` when it was negated, and `None` when nothing matched.
    pub fn matches(&self, rel: &str, is_dir: bool) -> Option<bool> {
        self.patterns.iter().fold(None, |state, pattern| {
            if pattern.matches(rel, is_dir) {
                Some(!pattern.is_negated())
            } else {
                state
            }
        })
    }

    /// Whether any positive pattern could still match a path strictly below
    /// the directory `rel`.
    pub fn could_match_within(&self, rel: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| !p.is_negated() && p.could_match_within(rel))
    }
}
