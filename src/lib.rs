//! treecp: concurrent recursive directory copy with a bounded worker pool

pub mod engine;
pub mod error;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::CopyError;
pub use types::*;

use log::debug;
use std::path::Path;

use engine::CopyJob;

/// Result alias used by the CLI layer
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: copy the tree at `src` into `dst/<base name of src>` with `opts`.
///
/// Returns a [`CopyReport`] once every file and directory has been handled. Failures of single
/// files or directories do not abort the run; they are logged and listed in
/// [`CopyReport::failures`]. Use [`CopyJob`] directly for a custom copy primitive or a
/// cancellation token.
///
/// ```no_run
/// use std::path::Path;
///
/// let opts = treecp::Opts { workers: Some(8), ..Default::default() };
/// let report = treecp::copy_dir(Path::new("project"), Path::new("/backup"), &opts)?;
/// println!("{} files copied, {} failed", report.files_copied, report.failures.len());
/// # Ok::<(), treecp::CopyError>(())
/// ```
pub fn copy_dir(
    src: &Path,
    dst: &Path,
    opts: &Opts,
) -> std::result::Result<CopyReport, CopyError> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    CopyJob::from(opts).copy_dir(src, dst)
}
