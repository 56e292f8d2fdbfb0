// src/main.rs

use anyhow::Result;
use clap::Parser;
use dirdump::cli::Cli;

fn main() -> Result<()> {
    // Logging goes to stderr, controlled by RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("starting dirdump v{}", env!("CARGO_PKG_VERSION"));

    let config = Cli::parse().into_config();

    match dirdump::export(&config) {
        Ok(summary) => {
            eprintln!(
                "Exported {} files to '{}' ({} binary/unreadable, {} directories pruned, {} entries skipped unread).",
                summary.files_exported,
                config.output_file.display(),
                summary.files_binary,
                summary.dirs_pruned,
                summary.entries_unreadable
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
