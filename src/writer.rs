//! Atomic file writer
//!
//! Uses the tempfile + rename pattern so a crashed rewrite never leaves a
//! half-written file in the build source tree.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExtsyncResult;

/// Write content to a file atomically.
///
/// The temporary file is created in the target's own directory so the final
/// rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> ExtsyncResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
