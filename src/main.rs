//! Extsync CLI - external content synchronizer for documentation builds
//!
//! Usage: extsync --srcdir <DIR> [--config <FILE>] [--dry-run] [--json]
//!
//! Reads content entries from a TOML config, copies stale files into the
//! documentation source directory, and adjusts directive paths in the copies.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use extsync::{BuildDriver, Config, SyncOptions};

/// Extsync - external content synchronizer for documentation builds
#[derive(Parser, Debug)]
#[command(name = "extsync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "extsync.toml")]
    config: PathBuf,

    /// Destination documentation source directory
    #[arg(short, long)]
    srcdir: PathBuf,

    /// Dry run - show what would be copied
    #[arg(long)]
    dry_run: bool,

    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_with_warnings(&cli.config)?;

    if !cli.json {
        println!("📦 Extsync");
        println!("Config: {}", cli.config.display());
        println!("Destination: {}", cli.srcdir.display());
        if cli.dry_run {
            println!("Mode: Dry run");
        }
        for warning in &warnings {
            println!(
                "⚠ Unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
        }
    }

    let options = SyncOptions {
        dry_run: cli.dry_run,
    };
    let driver = BuildDriver::new(config, &cli.srcdir);
    let outcome = driver.run(&options)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "sync",
            "status": "success",
            "dry_run": cli.dry_run,
            "copied": outcome.copied.len(),
            "skipped": outcome.skipped.len(),
            "rewritten": outcome.rewritten.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Sync Results:");
        if !outcome.copied.is_empty() {
            println!("  ✓ Copied: {} files", outcome.copied.len());
            for path in &outcome.copied {
                println!("    - {}", path.display());
            }
        }
        if !outcome.skipped.is_empty() {
            println!("  ⚠ Skipped: {} files (up to date)", outcome.skipped.len());
        }
        if !outcome.rewritten.is_empty() {
            println!("  ✎ Rewritten: {} files", outcome.rewritten.len());
            for path in &outcome.rewritten {
                println!("    - {}", path.display());
            }
        }
        if outcome.total() == 0 {
            println!("  Nothing matched.");
        }
        println!();
    }

    Ok(())
}
