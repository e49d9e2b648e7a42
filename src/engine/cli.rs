//! CLI command handler: merge config file and flags, copy, summarize.

use anyhow::Context;
use log::{debug, info, warn};

use crate::{Opts, Result};
use crate::engine::arg_parser::Cli;
use crate::engine::{CancelToken, CopyJob};
use crate::utils::{
    apply_file_to_opts, load_default_treecp_toml, load_treecp_toml, setup_logging,
};

/// Defaults, then config file, then flags given on the command line.
fn setup_opts(cli: &Cli) -> Result<Opts> {
    let mut opts = Opts::default();
    let file = match &cli.config {
        Some(path) => Some(load_treecp_toml(path)?),
        None => {
            let cwd = std::env::current_dir().context("read working directory")?;
            load_default_treecp_toml(&cwd)?
        }
    };
    if let Some(file) = &file {
        apply_file_to_opts(file, &mut opts);
    }

    if cli.workers.is_some() {
        opts.workers = cli.workers;
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(s) = cli.skip_existing {
        opts.skip_existing = s;
    }
    if let Some(c) = cli.copier {
        opts.copier = c;
    }
    Ok(opts)
}

/// Run one copy from the parsed command line. Ctrl+C stops dispatching new work.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli)?;
    setup_logging(opts.verbose);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let cancel = CancelToken::new();
    let cancel_handler = cancel.clone();
    ctrlc::set_handler(move || {
        cancel_handler.cancel();
    })
    .context("set Ctrl+C handler")?;

    let job = CopyJob::from(&opts).with_cancel_token(cancel);
    let report = job.copy_dir(&cli.source, &cli.destination)?;

    info!(
        "Copied {} files into {}",
        report.files_copied,
        report.destination.display()
    );
    if !report.is_clean() {
        warn!(
            "{} items failed to copy (see errors above)",
            report.failures.len()
        );
    }
    Ok(())
}
