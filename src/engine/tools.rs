//! Path utilities

use std::io;
use std::path::{Component, Path, PathBuf};

/// Remove `.` and fold `..` into its parent without touching the filesystem.
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Absolute form of `path` relative to the current working directory, lexically normalized.
/// Symlinks are not resolved and the path need not exist.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    Ok(normalize_lexically(&abs))
}
