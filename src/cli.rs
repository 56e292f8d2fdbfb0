// src/cli.rs

use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Exports the textual contents of a directory tree into a single annotated file.
///
/// dirdump walks the root directory, skips paths matched by a gitignore-style
/// ignore file (unless an include-pattern file reclaims them), and writes every
/// remaining file's content under a `===path===` header, preceded by a tree
/// rendering of the exported structure. Binary files are replaced by a fixed
/// placeholder and Jupyter notebook outputs are stripped by default.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to export from.
    #[arg(default_value = ".")]
    pub root_dir: PathBuf,

    /// Write the export to this file.
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.txt")]
    pub output_file: PathBuf,

    /// Ignore-pattern file (gitignore syntax). A missing file means no ignore rules.
    #[arg(long, value_name = "FILE", default_value = ".gitignore")]
    pub ignore_file: PathBuf,

    /// Include-pattern file whose patterns reclaim paths excluded by the ignore file.
    #[arg(long, value_name = "FILE")]
    pub include_file: Option<PathBuf>,

    /// Keep execution outputs in .ipynb notebooks instead of stripping them.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_notebook_outputs: bool,
}

impl Cli {
    /// Converts the parsed arguments into a run configuration.
    pub fn into_config(self) -> Config {
        Config {
            root_dir: self.root_dir,
            output_file: self.output_file,
            ignore_file: Some(self.ignore_file),
            include_file: self.include_file,
            strip_notebook_outputs: !self.keep_notebook_outputs,
        }
    }
}
