// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn dirdump_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dirdump"))
}

#[allow(dead_code)]
pub fn create_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
