//! Configuration for extsync
//!
//! Two knobs, loaded from a TOML file:
//! - `contents`: list of (base directory, glob pattern) content entries,
//!   default empty.
//! - `directives`: list of directive names whose paths are adjusted after a
//!   copy, default `figure`, `image`, `include`, `literalinclude`.
//!
//! Unknown keys are collected as non-fatal warnings rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExtsyncError, ExtsyncResult};
use crate::models::ContentEntry;

/// Default directives for included content
pub const DEFAULT_DIRECTIVES: [&str; 4] = ["figure", "image", "include", "literalinclude"];

fn default_directives() -> Vec<String> {
    DEFAULT_DIRECTIVES.iter().map(|d| d.to_string()).collect()
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Extsync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directive names whose path arguments are adjusted
    #[serde(default = "default_directives")]
    pub directives: Vec<String>,

    /// External content sets to synchronize, in order
    #[serde(default)]
    pub contents: Vec<ContentEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directives: default_directives(),
            contents: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ExtsyncResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> ExtsyncResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| ExtsyncError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| ConfigWarning {
                key: path_str,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }
}
