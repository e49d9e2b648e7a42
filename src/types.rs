//! Public types for the treecp API: options, per-run report.

use std::path::PathBuf;

use crate::engine::copier::CopierKind;
use crate::error::CopyError;

/// Options for a copy run (CLI and lib). Use [`Default`] and override what you need.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Concurrency limit. When None, derived from available threads and the FD limit.
    pub workers: Option<usize>,
    /// Log every successfully copied source path.
    pub verbose: bool,
    /// Leave existing destination files alone instead of overwriting them.
    pub skip_existing: bool,
    /// Which copy primitive to use for each file.
    pub copier: CopierKind,
}

/// One unit that failed: the path it was working on and why.
#[derive(Debug)]
pub struct UnitFailure {
    pub path: PathBuf,
    pub error: CopyError,
}

/// Outcome of [`CopyJob::copy_dir`](crate::engine::CopyJob::copy_dir).
///
/// The run is best-effort, so a returned report may still carry failures.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Top-level destination directory (`<dest>/<source base name>`).
    pub destination: PathBuf,
    pub files_copied: usize,
    pub dirs_listed: usize,
    /// Entries that were neither files nor directories, or were passed over after cancellation.
    pub skipped: usize,
    pub failures: Vec<UnitFailure>,
}

impl CopyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
