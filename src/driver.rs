//! Build driver
//!
//! The original host framework discovered this tool through a module-level
//! setup hook and fired it on a "build environment initialized" event. Here
//! that registration is explicit dependency injection: the build driver owns
//! the configuration and destination, and the embedding build invokes
//! [`BuildDriver::run`] once, before any source parsing happens.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::ExtsyncResult;
use crate::sync::{sync_contents, SyncOptions, SyncOutcome};

/// Plugin metadata record, for hosts that keep the plugin-loading convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionMeta {
    pub version: &'static str,
    pub parallel_read_safe: bool,
    pub parallel_write_safe: bool,
}

/// Metadata describing this extension.
///
/// Synchronization itself is sequential; the flags state that the host may
/// parallelize its own read and write phases after this pass has run.
pub fn manifest() -> ExtensionMeta {
    ExtensionMeta {
        version: env!("CARGO_PKG_VERSION"),
        parallel_read_safe: true,
        parallel_write_safe: true,
    }
}

/// Owns the configuration and destination for one build and runs the
/// synchronization pass.
#[derive(Debug, Clone)]
pub struct BuildDriver {
    config: Config,
    srcdir: PathBuf,
}

impl BuildDriver {
    pub fn new(config: Config, srcdir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            srcdir: srcdir.into(),
        }
    }

    /// Run the synchronization pass once.
    ///
    /// Call this at the point corresponding to "build environment
    /// initialized" - after configuration is loaded, before sources are
    /// parsed.
    pub fn run(&self, options: &SyncOptions) -> ExtsyncResult<SyncOutcome> {
        sync_contents(&self.config, &self.srcdir, options)
    }

    pub fn srcdir(&self) -> &std::path::Path {
        &self.srcdir
    }
}
