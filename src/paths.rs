//! Lexical path helpers for relativizing rewritten directive paths
//!
//! All operations here are lexical: nothing touches the filesystem except
//! [`absolutize`], which only consults the current working directory. The
//! rewrite pass needs relativization to work for targets that may not exist
//! yet at the time the path is computed.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: fold `.` components and resolve `..` against
/// preceding normal components. `..` at the start of a relative path is kept;
/// `..` directly under the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make a path absolute against the current working directory, then
/// lexically normalize it. Already-absolute paths are only normalized.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Compute the relative path from `base` to `target`.
///
/// Both paths must be normalized and either both absolute or both relative
/// to the same root; the synchronizer absolutizes everything up front.
pub fn relative_from(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for component in &target_parts[common..] {
        rel.push(component.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Render a path with forward-slash separators, the form directive paths use
/// regardless of platform.
pub fn to_posix(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => {
                if out.is_empty() {
                    out.push('/');
                }
            }
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
