pub mod config;
pub mod duration;
pub mod fd_limit;
pub mod logger;
pub mod treecp_toml;

pub use config::*;
pub use duration::format_duration;
pub use fd_limit::{
    FDS_PER_WORKER, determine_workers_given_fd_limit, max_open_fds, max_workers_by_fd_limit,
};
pub use logger::setup_logging;
pub use treecp_toml::{
    TreecpToml, apply_file_to_opts, load_default_treecp_toml, load_treecp_toml, parse_treecp_toml,
};
