//! Path rewriter for copied reStructuredText files
//!
//! After a file moves into the build source tree, directive paths like
//! `.. include:: snippets/a.rst` may no longer resolve. This pass rewrites
//! each one as the relative path from the copied file's directory back to the
//! original target, unless the path is absolute or already resolves at the
//! new location.
//!
//! The scan is a regex over the raw text, not a reStructuredText parser: a
//! path argument split across lines, or one containing a backtick, terminates
//! the capture and is left alone. That keeps the match from running into
//! inline markup or the next line.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::error::{ExtsyncError, ExtsyncResult};
use crate::paths;
use crate::writer::atomic_write;

/// Build the scan pattern for a set of directive names.
fn directive_pattern(directives: &[String]) -> ExtsyncResult<Regex> {
    let names = directives
        .iter()
        .map(|d| regex::escape(d))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\.\. ({})::\s*([^`\n]+)", names)).map_err(|e| {
        ExtsyncError::InvalidDirectives {
            message: e.to_string(),
        }
    })
}

/// Adjust included content paths in one copied file.
///
/// `file` is the destination the file was copied to; `basepath` is the parent
/// directory of the original source. Only `.rst` files are processed; any
/// other extension is a no-op. The file is written back (atomically) only if
/// at least one substitution actually changed the text, so untouched files
/// keep their timestamps and the freshness check stays effective on
/// subsequent builds.
///
/// Returns whether the file was rewritten.
pub fn adjust_includes(
    file: &Path,
    basepath: &Path,
    directives: &[String],
) -> ExtsyncResult<bool> {
    if file.extension().and_then(|e| e.to_str()) != Some("rst") {
        return Ok(false);
    }
    if directives.is_empty() {
        return Ok(false);
    }

    let file_dir = file.parent().unwrap_or_else(|| Path::new("."));
    let content = fs::read_to_string(file)?;
    let pattern = directive_pattern(directives)?;

    let adjusted = pattern.replace_all(&content, |caps: &Captures| {
        let directive = &caps[1];
        let fpath = &caps[2];

        // absolute paths and paths that already resolve are intentional
        let fpath_adj = if Path::new(fpath).is_absolute() || file_dir.join(fpath).exists() {
            fpath.to_string()
        } else {
            let target = paths::normalize(&basepath.join(fpath));
            paths::to_posix(&paths::relative_from(
                &target,
                &paths::normalize(file_dir),
            ))
        };

        format!(".. {}:: {}", directive, fpath_adj)
    });

    match adjusted {
        Cow::Borrowed(_) => Ok(false),
        Cow::Owned(new_content) => {
            if new_content == content {
                Ok(false)
            } else {
                atomic_write(file, new_content.as_bytes())?;
                Ok(true)
            }
        }
    }
}
