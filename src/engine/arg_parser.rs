use clap::Parser;
use std::path::PathBuf;

use crate::engine::copier::CopierKind;

/// Copy a directory tree in parallel, preserving its structure under DESTINATION.
#[derive(Clone, Parser)]
#[command(name = "treecp")]
#[command(about = "Copy SOURCE into DESTINATION/<name of SOURCE> using a bounded pool of workers.")]
pub struct Cli {
    /// Directory to copy.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory to copy into. Created if missing.
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Maximum number of files/directories processed at once. Default: available threads.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Log every copied file and show debug output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Do not overwrite files that already exist in DESTINATION.
    #[arg(long, short = 's', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub skip_existing: Option<bool>,

    /// Copy primitive: portable stream copy or the OS bulk-copy path.
    #[arg(long, value_enum)]
    pub copier: Option<CopierKind>,

    /// Config file. Default: `.treecp.toml` in the working directory, when present.
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}
