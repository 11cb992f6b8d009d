//! Git operations using git2-rs.

pub mod gitlinks;
pub mod log;
pub mod modules_file;
pub mod trailers;

pub use gitlinks::{ChangeKind, SubmoduleChange, comparison_base, diff_gitlinks};
pub use log::{CommitLogEntry, submodule_commits};
pub use trailers::trailer_block_start;
