// src/constants.rs

/// Banner line surrounding section titles in the output artifact.
pub const SECTION_BANNER: &str = "================";

/// Title of the tree section at the top of the artifact.
pub const STRUCTURE_TITLE: &str = "DIRECTORY STRUCTURE";

/// Title of the concatenated-contents section.
pub const CONTENTS_TITLE: &str = "FILE CONTENTS";

/// Fixed text substituted for binary or undecodable file content.
/// Downstream tools may match on this string; keep it stable.
pub const BINARY_PLACEHOLDER: &str = "[non-text or unreadable content]";

/// Number of bytes sampled from the head of a file for text detection.
pub const DETECTION_SAMPLE_SIZE: usize = 1024;

/// File extension that triggers the notebook output-stripping transform.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";
