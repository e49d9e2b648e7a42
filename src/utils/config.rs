//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

use super::fd_limit::determine_workers_given_fd_limit;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    worker_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
                worker_prefix: format!("{pkg}-worker"),
            }
        })
    }

    /// Config file looked up in the working directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    pub fn worker_thread_name(&self, index: usize) -> String {
        format!("{}-{index}", self.worker_prefix)
    }
}

// ---- Worker threads ----

/// Worker limits for the copy pool.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon; the rest are const.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Never run with fewer workers than this.
    pub floor: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0, // use current() to set from rayon
            floor: Self::FLOOR_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const FLOOR_THREADS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }

    /// Default concurrency: one worker per available thread, capped by the FD limit.
    pub fn default_workers(&self) -> usize {
        self.clamp(self.all_threads)
    }

    /// Apply floor and FD cap to a requested worker count.
    pub fn clamp(&self, requested: usize) -> usize {
        determine_workers_given_fd_limit(requested).max(self.floor)
    }
}

// ---- Copying ----

/// Copy primitive buffer sizes.
pub struct CopyConsts;

impl CopyConsts {
    /// Read buffer for the stream copier (bytes). 128 KB.
    pub const STREAM_BUFFER_SIZE: usize = 128 * 1024;
    /// Smallest buffer the stream copier accepts (bytes). 4 KB.
    pub const MIN_BUFFER_SIZE: usize = 4 * 1024;
}
