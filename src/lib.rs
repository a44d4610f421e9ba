//! Extsync - external content synchronizer for documentation builds
//!
//! Extsync copies sources from directories outside the documentation source
//! tree into it before a build starts. The copy is smart: only files whose
//! source is newer than the destination are actually copied, so incremental
//! builds detect changes correctly. Relative paths in directives such as
//! `figure`, `image`, `include` and `literalinclude` are adjusted after the
//! copy so they still resolve from the new location.

pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod paths;
pub mod rewrite;
pub mod sync;
pub mod writer;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, DEFAULT_DIRECTIVES};
pub use driver::{manifest, BuildDriver, ExtensionMeta};
pub use error::{ExtsyncError, ExtsyncResult};
pub use models::{ContentEntry, CopyTask};
pub use rewrite::adjust_includes;
pub use sync::{collect_tasks, sync_contents, SyncOptions, SyncOutcome};
