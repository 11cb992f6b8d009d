//! The prepare-commit-msg hook flow.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, info};

use crate::config::HookConfig;
use crate::error::{GitError, HookError};
use crate::git::gitlinks::{comparison_base, diff_gitlinks};
use crate::git::log::submodule_commits;
use crate::message::block::compose_block;
use crate::message::format::format_change;
use crate::message::splice::splice_message;

/// Where the draft message came from, as git reports it in the hook's
/// second argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    Message,
    Template,
    Merge,
    Squash,
    Commit,
}

impl MessageSource {
    /// Parse git's source argument. Unknown values map to `None` and the
    /// invocation is treated like a plain commit.
    pub fn parse(source: &str) -> Option<Self> {
        match source {
            "message" => Some(Self::Message),
            "template" => Some(Self::Template),
            "merge" => Some(Self::Merge),
            "squash" => Some(Self::Squash),
            "commit" => Some(Self::Commit),
            _ => None,
        }
    }
}

/// One hook invocation, built from the arguments git passes to
/// `prepare-commit-msg`.
#[derive(Debug, Clone)]
pub struct CommitContext {
    /// File holding the draft commit message.
    pub message_file: PathBuf,
    /// Where the draft came from, when git supplied a source.
    pub source: Option<MessageSource>,
    /// The commit named in the third hook argument (`source == commit`).
    pub commit_ref: Option<String>,
}

impl CommitContext {
    /// Whether this invocation rewrites an existing commit's message.
    pub fn is_amend(&self) -> bool {
        matches!(self.source, Some(MessageSource::Commit))
    }

    /// The commit being amended, when this is an amend.
    fn amend_target(&self) -> Option<&str> {
        self.is_amend()
            .then(|| self.commit_ref.as_deref().unwrap_or("HEAD"))
    }
}

/// Run one hook invocation against an open repository.
///
/// Computes the submodule changes between the comparison base and the
/// staged index, splices the formatted section into the draft message, and
/// writes the file back. A draft without submodule changes and without a
/// stale section is left untouched on disk.
pub fn run_hook(
    repo: &Repository,
    ctx: &CommitContext,
    config: &HookConfig,
) -> Result<(), HookError> {
    let base = comparison_base(repo, ctx.amend_target())?;
    let base_tree = match &base {
        Some(commit) => Some(commit.tree().map_err(GitError::ReadTree)?),
        None => None,
    };

    let changes = diff_gitlinks(repo, base_tree.as_ref())?;
    if changes.is_empty() {
        debug!("no submodule changes staged, leaving message untouched");
        return Ok(());
    }

    info!(count = changes.len(), amend = ctx.is_amend(), "formatting submodule changes");

    let mut formatted = Vec::with_capacity(changes.len());
    for change in &changes {
        let entries = match (change.old, change.new) {
            (Some(old), Some(new)) => submodule_commits(repo, &change.path, old, new)?,
            _ => Vec::new(),
        };
        formatted.push(format_change(change, &entries, config));
    }

    let block = compose_block(&formatted);

    let draft = fs::read_to_string(&ctx.message_file).map_err(HookError::ReadMessage)?;
    let spliced = splice_message(&draft, block.as_deref());

    if spliced != draft {
        write_message(&ctx.message_file, &spliced)?;
    }

    Ok(())
}

/// Replace the message file atomically: the full text is written to a
/// sibling temp file first, so a failure never leaves a half-spliced
/// message behind.
fn write_message(path: &Path, content: &str) -> Result<(), HookError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(HookError::WriteMessage)?;
    tmp.write_all(content.as_bytes())
        .map_err(HookError::WriteMessage)?;
    tmp.persist(path)
        .map_err(|e| HookError::WriteMessage(e.error))?;

    Ok(())
}
