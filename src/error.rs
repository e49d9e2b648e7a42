//! Error taxonomy for a copy run.
//!
//! `PathResolution`, `DirectoryCreation` and `WorkerPool` are fatal and returned before any unit
//! starts. `Listing` and `Copy` belong to a single unit: they are logged and collected into
//! [`CopyReport::failures`](crate::CopyReport), never returned from `copy_dir`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("cannot resolve absolute path for {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unable to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to copy {} -> {}: {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy cancelled after {copied} files")]
    Cancelled { copied: usize },
}

impl CopyError {
    /// True for errors raised inside a traversal or copy unit (reported, not returned).
    pub fn is_unit_error(&self) -> bool {
        matches!(self, CopyError::Listing { .. } | CopyError::Copy { .. })
    }
}
