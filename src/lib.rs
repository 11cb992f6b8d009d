//! subnote - a `prepare-commit-msg` git hook that records submodule changes.
//!
//! # Overview
//!
//! When a commit touches one or more submodule pointers, subnote injects a
//! fenced "Submodule changes:" section into the commit message listing what
//! happened inside each submodule: the new commits for an advanced pointer,
//! or a single `Added`/`Removed` marker. On amend the section is recomputed
//! against the parent commit and replaces the previous one in place, so the
//! message never accumulates duplicate sections and trailers stay untouched.

pub mod config;
pub mod error;
pub mod git;
pub mod hook;
pub mod install;
pub mod message;

// Re-export commonly used types
pub use config::HookConfig;
pub use error::{GitError, HookError, InstallError};
pub use git::gitlinks::{ChangeKind, SubmoduleChange};
pub use git::log::CommitLogEntry;
pub use hook::{CommitContext, MessageSource, run_hook};
pub use message::format::FormattedChange;
