//! Content synchronizer
//!
//! Expands each configured content entry's glob, copies stale files into the
//! build source tree, and runs the path rewriter on every file actually
//! copied. The copy is skip-if-unchanged: a destination that is at least as
//! new as its source produces no write and no rewrite pass, which is what
//! keeps incremental builds stable.
//!
//! When two entries map different sources to the same destination path the
//! result is undefined: tasks are processed in configuration order and each
//! copy is subject to the freshness check, so which source lands depends on
//! entry order and timestamps. Configure non-overlapping entries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ExtsyncError, ExtsyncResult};
use crate::models::{ContentEntry, CopyTask};
use crate::paths;
use crate::rewrite;

/// Options for a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Dry run - report what would be copied without writing
    pub dry_run: bool,
}

/// Result of a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    /// Destination files copied (or, in a dry run, that would be copied)
    pub copied: Vec<PathBuf>,
    /// Destination files skipped as already up to date
    pub skipped: Vec<PathBuf>,
    /// Copied files whose directive paths were rewritten
    pub rewritten: Vec<PathBuf>,
}

impl SyncOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total files considered
    pub fn total(&self) -> usize {
        self.copied.len() + self.skipped.len()
    }
}

fn expand(pattern: &str) -> ExtsyncResult<glob::Paths> {
    glob::glob(pattern).map_err(|e| ExtsyncError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn walk_entry(matched: Result<PathBuf, glob::GlobError>) -> ExtsyncResult<PathBuf> {
    matched.map_err(|e| ExtsyncError::GlobWalk {
        path: e.path().to_path_buf(),
        message: e.to_string(),
    })
}

/// Expand content entries into copy tasks.
///
/// Entry bases are absolutized against the current working directory first.
/// A glob match that is a directory is expanded recursively to the files
/// beneath it; directories themselves are never copy tasks.
pub fn collect_tasks(entries: &[ContentEntry]) -> ExtsyncResult<Vec<CopyTask>> {
    let mut tasks = Vec::new();

    for entry in entries {
        let base = paths::absolutize(&entry.base)?;
        let pattern = base.join(&entry.pattern);

        for matched in expand(&pattern.to_string_lossy())? {
            let path = walk_entry(matched)?;
            if path.is_dir() {
                let nested_pattern = path.join("**").join("*");
                for nested in expand(&nested_pattern.to_string_lossy())? {
                    let nested = walk_entry(nested)?;
                    if !nested.is_dir() {
                        tasks.push(CopyTask {
                            source: nested,
                            base: base.clone(),
                        });
                    }
                }
            } else {
                tasks.push(CopyTask {
                    source: path,
                    base: base.clone(),
                });
            }
        }
    }

    Ok(tasks)
}

/// Freshness check: copy only when the destination is missing or the source
/// is strictly newer.
fn is_stale(source: &Path, dest: &Path) -> ExtsyncResult<bool> {
    if !dest.exists() {
        return Ok(true);
    }
    let source_modified = fs::metadata(source)?.modified()?;
    let dest_modified = fs::metadata(dest)?.modified()?;
    Ok(source_modified > dest_modified)
}

/// Synchronize external contents into `srcdir`.
///
/// For every file matched by any entry's glob, copy it to the build source
/// root joined with its path relative to the entry's base, creating
/// intermediate directories as needed, and immediately adjust directive
/// paths in the copy. Filesystem errors propagate to the caller.
pub fn sync_contents(
    config: &Config,
    srcdir: &Path,
    options: &SyncOptions,
) -> ExtsyncResult<SyncOutcome> {
    let srcdir = paths::absolutize(srcdir)?;
    let tasks = collect_tasks(&config.contents)?;
    let mut outcome = SyncOutcome::new();

    for task in &tasks {
        let dest = task.destination(&srcdir)?;

        if !is_stale(&task.source, &dest)? {
            outcome.skipped.push(dest);
            continue;
        }

        if options.dry_run {
            outcome.copied.push(dest);
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&task.source, &dest)?;
        outcome.copied.push(dest.clone());

        let basepath = task.source.parent().unwrap_or_else(|| Path::new("."));
        if rewrite::adjust_includes(&dest, basepath, &config.directives)? {
            outcome.rewritten.push(dest);
        }
    }

    Ok(outcome)
}
