//! Single-file copy primitives.
//!
//! The traversal engine only knows [`CopyPrimitive`]; which bytes move how is up to the
//! implementation. Closures with the same signature implement the trait too, which is how tests
//! instrument a run.

use clap::ValueEnum;
use serde::Deserialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::utils::config::CopyConsts;

/// Copy `src` to `dst`. Must create `dst` if absent and replace it when `overwrite` is true.
/// With `overwrite == false` an existing `dst` fails with [`io::ErrorKind::AlreadyExists`].
pub trait CopyPrimitive: Send + Sync {
    fn copy(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()>;
}

impl<F> CopyPrimitive for F
where
    F: Fn(&Path, &Path, bool) -> io::Result<()> + Send + Sync,
{
    fn copy(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()> {
        self(src, dst, overwrite)
    }
}

/// Open `dst` for writing according to the overwrite policy.
fn open_destination(dst: &Path, overwrite: bool) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    opts.open(dst)
}

/// Portable buffered stream copy.
#[derive(Clone, Debug)]
pub struct StreamCopier {
    buffer_size: usize,
}

impl Default for StreamCopier {
    fn default() -> Self {
        Self {
            buffer_size: CopyConsts::STREAM_BUFFER_SIZE,
        }
    }
}

impl StreamCopier {
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(CopyConsts::MIN_BUFFER_SIZE),
        }
    }
}

impl CopyPrimitive for StreamCopier {
    fn copy(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()> {
        // Open the source first so a missing file never leaves an empty destination behind.
        let mut reader = BufReader::with_capacity(self.buffer_size, File::open(src)?);
        let mut writer = open_destination(dst, overwrite)?;
        io::copy(&mut reader, &mut writer)?;
        Ok(())
    }
}

/// OS bulk copy through [`std::fs::copy`] (copy_file_range/sendfile on Linux,
/// fclonefileat/fcopyfile on macOS, CopyFileExW on Windows). Also copies permission bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeCopier;

impl CopyPrimitive for NativeCopier {
    fn copy(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()> {
        if !overwrite {
            fs::metadata(src)?;
            // Claim the name atomically; fs::copy then fills the file we created.
            open_destination(dst, false)?;
            if let Err(e) = fs::copy(src, dst) {
                let _ = fs::remove_file(dst);
                return Err(e);
            }
            return Ok(());
        }
        fs::copy(src, dst)?;
        Ok(())
    }
}

/// Copy primitive selectable from CLI and config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopierKind {
    #[default]
    Stream,
    Native,
}

impl CopierKind {
    pub fn build(self) -> Arc<dyn CopyPrimitive> {
        match self {
            CopierKind::Stream => Arc::new(StreamCopier::default()),
            CopierKind::Native => Arc::new(NativeCopier),
        }
    }
}
