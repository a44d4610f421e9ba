//! Error types for extsync
//!
//! Uses `thiserror` for library errors. IO errors convert via `#[from]` and
//! propagate unmodified: a failed preprocessing step should fail the whole
//! build loudly rather than silently produce stale documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extsync operations
pub type ExtsyncResult<T> = Result<T, ExtsyncError>;

/// Main error type for extsync operations
#[derive(Error, Debug)]
pub enum ExtsyncError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern failed to compile
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Glob expansion failed while reading a directory entry
    #[error("glob expansion failed at {path}: {message}")]
    GlobWalk { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Directive list produced an unusable scan pattern
    #[error("invalid directive list: {message}")]
    InvalidDirectives { message: String },

    /// Matched source file falls outside its content entry's base directory
    #[error("path '{path}' escapes content base '{base}'")]
    PathEscape { path: PathBuf, base: PathBuf },
}
