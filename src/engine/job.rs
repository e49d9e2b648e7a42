//! Traversal engine: copy a directory tree on a bounded worker pool.
//!
//! One run opens a single [`rayon::scope`] on a dedicated pool sized to the worker limit. Every
//! directory and every file discovered becomes its own task in that scope:
//!
//! - a traversal unit lists one directory, spawns a traversal unit per subdirectory and a copy
//!   unit per regular file, and never descends in place;
//! - a copy unit maps its file to the destination, creates the parent directory and hands the
//!   pair to the [`CopyPrimitive`].
//!
//! The scope joins the whole dynamically growing set, so [`CopyJob::copy_dir`] returns exactly
//! when the last unit has finished. Traversal and copy units only ever run on the pool's own
//! threads, so at most `workers` of them run at once; the rest wait in the pool's queue. Unit errors are logged, sent on a channel and folded into the [`CopyReport`].

use crossbeam_channel::{Sender, unbounded};
use log::{debug, error, info};
use rayon::{Scope, ThreadPoolBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::cancel::CancelToken;
use super::copier::{CopyPrimitive, StreamCopier};
use super::mapper::{destination_root_for, map_destination};
use super::tools::resolve_absolute;
use crate::error::CopyError;
use crate::types::{CopyReport, Opts, UnitFailure};
use crate::utils::config::{PackagePaths, WorkerThreadLimits};

/// Immutable per-job settings.
#[derive(Clone, Debug)]
pub struct JobConfig {
    pub workers: usize,
    pub verbose: bool,
    pub skip_if_exists: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            workers: WorkerThreadLimits::current().default_workers(),
            verbose: false,
            skip_if_exists: false,
        }
    }
}

impl JobConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(WorkerThreadLimits::FLOOR_THREADS);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn skip_if_exists(mut self, skip: bool) -> Self {
        self.skip_if_exists = skip;
        self
    }

    /// Policy handed to the copy primitive.
    pub fn overwrite(&self) -> bool {
        !self.skip_if_exists
    }
}

impl From<&Opts> for JobConfig {
    fn from(o: &Opts) -> Self {
        let limits = WorkerThreadLimits::current();
        JobConfig {
            workers: o
                .workers
                .map(|n| limits.clamp(n))
                .unwrap_or_else(|| limits.default_workers()),
            verbose: o.verbose,
            skip_if_exists: o.skip_existing,
        }
    }
}

/// A configured copy job. Each [`copy_dir`](Self::copy_dir) call builds its own pool and scope,
/// so one job may run several copies one after another.
pub struct CopyJob {
    config: JobConfig,
    copier: Arc<dyn CopyPrimitive>,
    cancel: CancelToken,
}

impl Default for CopyJob {
    fn default() -> Self {
        Self::new(JobConfig::default())
    }
}

impl From<&Opts> for CopyJob {
    fn from(o: &Opts) -> Self {
        CopyJob {
            config: JobConfig::from(o),
            copier: o.copier.build(),
            cancel: CancelToken::new(),
        }
    }
}

impl CopyJob {
    pub fn new(config: JobConfig) -> Self {
        Self {
            config,
            copier: Arc::new(StreamCopier::default()),
            cancel: CancelToken::new(),
        }
    }

    /// Replace the copy primitive (stream copy by default).
    pub fn with_copier<C: CopyPrimitive + 'static>(mut self, copier: C) -> Self {
        self.copier = Arc::new(copier);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Copy the tree at `src` into `dst/<base name of src>` and block until every unit is done.
    ///
    /// Fails only for setup problems (path resolution, top-level directory creation, pool
    /// start) or when the run was cancelled. Per-directory and per-file failures are logged and
    /// returned in [`CopyReport::failures`].
    pub fn copy_dir(&self, src: &Path, dst: &Path) -> Result<CopyReport, CopyError> {
        let source_root = resolve_absolute(src).map_err(|e| CopyError::PathResolution {
            path: src.to_path_buf(),
            source: e,
        })?;
        let dest_root = resolve_absolute(dst).map_err(|e| CopyError::PathResolution {
            path: dst.to_path_buf(),
            source: e,
        })?;

        let top_level = destination_root_for(&source_root, &dest_root);
        fs::create_dir_all(&top_level).map_err(|e| CopyError::DirectoryCreation {
            path: top_level.clone(),
            source: e,
        })?;
        debug!(
            "Copying {} -> {} with {} workers",
            source_root.display(),
            top_level.display(),
            self.config.workers
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| PackagePaths::get().worker_thread_name(i))
            .build()?;

        let (failure_tx, failure_rx) = unbounded();
        let run = RunContext {
            source_root,
            dest_root,
            top_level,
            overwrite: self.config.overwrite(),
            verbose: self.config.verbose,
            copier: Arc::clone(&self.copier),
            cancel: self.cancel.clone(),
            counters: RunCounters::default(),
            failure_tx,
        };

        pool.scope(|s| {
            let run = &run;
            s.spawn(move |s| traverse_dir(s, run, run.source_root.clone()));
        });

        let RunContext {
            top_level,
            counters,
            failure_tx,
            ..
        } = run;
        drop(failure_tx);

        let report = CopyReport {
            destination: top_level,
            files_copied: counters.files_copied.into_inner(),
            dirs_listed: counters.dirs_listed.into_inner(),
            skipped: counters.skipped.into_inner(),
            failures: failure_rx.iter().collect(),
        };
        debug!(
            "Done: {} files copied, {} dirs listed, {} skipped, {} failed",
            report.files_copied,
            report.dirs_listed,
            report.skipped,
            report.failures.len()
        );

        if self.cancel.is_cancelled() {
            return Err(CopyError::Cancelled {
                copied: report.files_copied,
            });
        }
        Ok(report)
    }
}

#[derive(Default)]
struct RunCounters {
    files_copied: AtomicUsize,
    dirs_listed: AtomicUsize,
    skipped: AtomicUsize,
}

/// Everything a unit needs, borrowed by all units of one run for the lifetime of the scope.
struct RunContext {
    source_root: PathBuf,
    dest_root: PathBuf,
    top_level: PathBuf,
    overwrite: bool,
    verbose: bool,
    copier: Arc<dyn CopyPrimitive>,
    cancel: CancelToken,
    counters: RunCounters,
    failure_tx: Sender<UnitFailure>,
}

impl RunContext {
    fn report(&self, path: &Path, err: CopyError) {
        error!("{}", err);
        let _ = self.failure_tx.send(UnitFailure {
            path: path.to_path_buf(),
            error: err,
        });
    }

    fn skip(&self) {
        self.counters.skipped.fetch_add(1, Ordering::Relaxed);
    }
}

/// Traversal unit: list `dir` and dispatch one unit per subdirectory and per regular file.
fn traverse_dir<'scope>(scope: &Scope<'scope>, run: &'scope RunContext, dir: PathBuf) {
    if run.cancel.is_cancelled() {
        run.skip();
        return;
    }

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            run.report(&dir, listing_error(&dir, e));
            return;
        }
    };
    run.counters.dirs_listed.fetch_add(1, Ordering::Relaxed);

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                run.report(&dir, listing_error(&dir, e));
                return;
            }
        };
        let path = entry.path();

        // Never walk back into ourselves or into the tree this run is writing.
        if path == dir || path == run.top_level {
            debug!("Not descending into {}", path.display());
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                run.report(&dir, listing_error(&path, e));
                return;
            }
        };

        if file_type.is_dir() {
            scope.spawn(move |s| traverse_dir(s, run, path));
        } else if file_type.is_file() {
            scope.spawn(move |_| copy_file(run, path));
        } else {
            debug!("Skipping {}: not a regular file or directory", path.display());
            run.skip();
        }
    }
}

/// Copy unit: map `src`, make sure the parent exists, run the copy primitive.
fn copy_file(run: &RunContext, src: PathBuf) {
    if run.cancel.is_cancelled() {
        run.skip();
        return;
    }

    let dst = map_destination(&run.source_root, &run.dest_root, &src);
    if dst == src {
        debug!("Skipping {}: destination is the source itself", src.display());
        run.skip();
        return;
    }

    if let Some(parent) = dst.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        let err = CopyError::Copy {
            src: src.clone(),
            dst: parent.to_path_buf(),
            source: e,
        };
        run.report(&src, err);
        return;
    }

    if run.cancel.is_cancelled() {
        run.skip();
        return;
    }

    match run.copier.copy(&src, &dst, run.overwrite) {
        Ok(()) => {
            run.counters.files_copied.fetch_add(1, Ordering::Relaxed);
            if run.verbose {
                info!("{}", src.display());
            }
        }
        Err(e) => {
            let err = CopyError::Copy {
                src: src.clone(),
                dst,
                source: e,
            };
            run.report(&src, err);
        }
    }
}

fn listing_error(path: &Path, source: io::Error) -> CopyError {
    CopyError::Listing {
        path: path.to_path_buf(),
        source,
    }
}
