//! treecp CLI: copy a directory tree in parallel.

use clap::Parser;
use std::time::Instant;
use treecp::engine::arg_parser::Cli;
use treecp::engine::handle_run;
use treecp::Result;
use treecp::utils::format_duration;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::info!("Took: {}", format_duration(start_time.elapsed()));
    Ok(())
}
