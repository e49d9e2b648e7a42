//! Engine module: path mapping, copy primitives and the traversal engine

pub mod arg_parser;
pub mod cancel;
pub mod cli;
pub mod copier;
pub mod job;
pub mod mapper;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cancel::CancelToken;
pub use cli::handle_run;
pub use copier::{CopierKind, CopyPrimitive, NativeCopier, StreamCopier};
pub use job::{CopyJob, JobConfig};
pub use mapper::{destination_root_for, map_destination};
pub use tools::{normalize_lexically, resolve_absolute};
