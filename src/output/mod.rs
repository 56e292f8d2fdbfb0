// src/output/mod.rs

//! Serializes the export into the output artifact.
//!
//! Artifact layout (stable; downstream tools parse it):
//! a `DIRECTORY STRUCTURE` banner followed by a tree rendering of the
//! selected paths, a `FILE CONTENTS` banner, then one block per entry:
//! `==={relative_path}===`, the content, and a blank separator line.

mod tree;
pub mod writer;

pub use tree::render_tree;
pub use writer::OutputFile;

use crate::constants::SECTION_BANNER;
use crate::content::ExportedEntry;
use std::io::{self, Write};
use std::path::Path;

/// Writes one banner-framed section title.
pub fn write_section_header(writer: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(writer, "{}", SECTION_BANNER)?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", SECTION_BANNER)?;
    writeln!(writer)
}

/// Writes one exported entry: its `===path===` header, content, and the
/// separator before the next entry.
pub fn write_entry(writer: &mut dyn Write, entry: &ExportedEntry) -> io::Result<()> {
    writeln!(writer, "==={}===", display_path(&entry.relative_path))?;
    writer.write_all(entry.content.as_bytes())?;
    writer.write_all(b"\n\n")
}

/// Header paths always use `/` separators, whatever the platform.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BINARY_PLACEHOLDER;
    use std::path::PathBuf;

    fn entry(rel: &str, content: &str) -> ExportedEntry {
        ExportedEntry {
            relative_path: PathBuf::from(rel),
            content: content.to_string(),
            is_placeholder: false,
        }
    }

    #[test]
    fn test_section_header_format() {
        let mut buf = Vec::new();
        write_section_header(&mut buf, "FILE CONTENTS").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "================\nFILE CONTENTS\n================\n\n"
        );
    }

    #[test]
    fn test_entry_block_format() {
        let mut buf = Vec::new();
        write_entry(&mut buf, &entry("sub/c.txt", "line 1\nline 2")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "===sub/c.txt===\nline 1\nline 2\n\n"
        );
    }

    #[test]
    fn test_placeholder_entry_block() {
        let mut buf = Vec::new();
        let e = ExportedEntry {
            relative_path: PathBuf::from("blob.bin"),
            content: BINARY_PLACEHOLDER.to_string(),
            is_placeholder: true,
        };
        write_entry(&mut buf, &e).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("===blob.bin===\n"));
        assert!(text.contains(BINARY_PLACEHOLDER));
    }

    #[test]
    fn test_display_path_normalizes_separators() {
        assert_eq!(display_path(&PathBuf::from("a/b.txt")), "a/b.txt");
    }
}
