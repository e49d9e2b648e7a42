//! Source → destination path mapping.
//!
//! Every discovered path keeps its position relative to the source root and lands under
//! `<dest_root>/<source base name>`. The join is component-wise and prefix-aware: the shared
//! leading components of the source anchor (the source root's parent) and the discovered path are
//! dropped, and only what follows is appended to the destination. Segments that happen to appear
//! in both the destination and the source (`/data/project` into `/backup/data`) are never
//! collapsed or repeated.

use std::path::{Component, Path, PathBuf};

use super::tools::normalize_lexically;

/// Map `discovered` (absolute, under `source_root`) to its absolute destination under `dest_root`.
///
/// ```
/// use std::path::Path;
/// use treecp::engine::map_destination;
///
/// let dst = map_destination(Path::new("/a/b"), Path::new("/x/a"), Path::new("/a/b/c/d.txt"));
/// assert_eq!(dst, Path::new("/x/a/b/c/d.txt"));
/// ```
pub fn map_destination(source_root: &Path, dest_root: &Path, discovered: &Path) -> PathBuf {
    let anchor = source_root.parent().unwrap_or(source_root);
    let mut rest = discovered.components().peekable();

    // Skip while both sequences agree; the first divergence (or the end of the anchor) starts the tail.
    for a in anchor.components() {
        match rest.peek() {
            Some(d) if *d == a => {
                rest.next();
            }
            _ => break,
        }
    }

    let mut mapped = dest_root.to_path_buf();
    // Root/prefix components would reset the PathBuf on push.
    mapped.extend(rest.filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir)));
    normalize_lexically(&mapped)
}

/// Top-level destination directory for a run: `dest_root/<base name of source_root>`.
/// A source root without a base name (`/`) maps straight onto `dest_root`.
pub fn destination_root_for(source_root: &Path, dest_root: &Path) -> PathBuf {
    map_destination(source_root, dest_root, source_root)
}
