//! Core data model: content entries and the copy tasks derived from them

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExtsyncError, ExtsyncResult};

/// A configured external content set: a base directory plus a glob pattern
/// resolved against it.
///
/// Supports both the table form:
///   [[contents]]
///   base = "../ext/docs"
///   pattern = "guide/*.rst"
///
/// And the original two-element pair form:
///   contents = [["../ext/docs", "guide/*.rst"]]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// External base directory the pattern is resolved against
    pub base: PathBuf,
    /// File glob pattern, relative to `base`
    pub pattern: String,
}

impl ContentEntry {
    pub fn new(base: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ContentEntryDe {
    Pair(PathBuf, String),
    Table { base: PathBuf, pattern: String },
}

impl<'de> Deserialize<'de> for ContentEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match ContentEntryDe::deserialize(deserializer)? {
            ContentEntryDe::Pair(base, pattern) => Ok(Self { base, pattern }),
            ContentEntryDe::Table { base, pattern } => Ok(Self { base, pattern }),
        }
    }
}

/// A single file to copy: the matched source path and the content entry base
/// it was matched under. Recomputed fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Source file (never a directory)
    pub source: PathBuf,
    /// Base directory of the entry that matched it
    pub base: PathBuf,
}

impl CopyTask {
    /// Destination path: the build source root joined with the source's
    /// location relative to the entry's base directory.
    pub fn destination(&self, srcdir: &Path) -> ExtsyncResult<PathBuf> {
        let rel = self
            .source
            .strip_prefix(&self.base)
            .map_err(|_| ExtsyncError::PathEscape {
                path: self.source.clone(),
                base: self.base.clone(),
            })?;
        Ok(srcdir.join(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_joins_relative_part() {
        let task = CopyTask {
            source: PathBuf::from("/ext/docs/guide/intro.rst"),
            base: PathBuf::from("/ext/docs"),
        };
        let dest = task.destination(Path::new("/build/src")).unwrap();
        assert_eq!(dest, PathBuf::from("/build/src/guide/intro.rst"));
    }

    #[test]
    fn destination_outside_base_is_an_error() {
        let task = CopyTask {
            source: PathBuf::from("/other/intro.rst"),
            base: PathBuf::from("/ext/docs"),
        };
        let err = task.destination(Path::new("/build/src")).unwrap_err();
        assert!(matches!(err, ExtsyncError::PathEscape { .. }));
    }

    #[test]
    fn content_entry_deserializes_from_pair() {
        let entry: ContentEntry = serde_json::from_str(r#"["/ext/docs", "guide/*.rst"]"#).unwrap();
        assert_eq!(entry, ContentEntry::new("/ext/docs", "guide/*.rst"));
    }

    #[test]
    fn content_entry_deserializes_from_table() {
        let entry: ContentEntry =
            serde_json::from_str(r#"{"base": "/ext/docs", "pattern": "guide/*.rst"}"#).unwrap();
        assert_eq!(entry, ContentEntry::new("/ext/docs", "guide/*.rst"));
    }
}
