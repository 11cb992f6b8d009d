//! Gitlink change detection between the parent commit and the staged index.

use git2::{Commit, ErrorCode, Index, Oid, Repository, Tree};
use tracing::debug;

use crate::error::GitError;
use crate::git::modules_file;

/// Tree/index entry mode of a gitlink (submodule pointer).
const GITLINK_MODE: u32 = 0o160000;

/// What happened to a submodule in the pending commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One submodule whose recorded pointer differs between the comparison base
/// and the staged snapshot. `old == new` is never reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleChange {
    pub path: String,
    /// Pointer recorded by the parent commit; `None` if absent there.
    pub old: Option<Oid>,
    /// Pointer in the staged index; `None` if the submodule was removed.
    pub new: Option<Oid>,
}

impl SubmoduleChange {
    pub fn kind(&self) -> ChangeKind {
        match (self.old, self.new) {
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Removed,
            _ => ChangeKind::Modified,
        }
    }
}

/// Resolve the commit the staged snapshot is compared against.
///
/// For a plain commit that is `HEAD` (the parent-to-be); an unborn branch
/// has no base and every registered submodule counts as added. For an amend
/// the base is the first parent of the commit being amended, never the
/// pre-amend commit itself — the comparison base must not move forward
/// across repeated amends.
pub fn comparison_base<'a>(
    repo: &'a Repository,
    amend_of: Option<&str>,
) -> Result<Option<Commit<'a>>, GitError> {
    if let Some(spec) = amend_of {
        let object = repo
            .revparse_single(spec)
            .map_err(|e| GitError::ResolveCommit(spec.to_string(), e))?;
        let amended = object.peel_to_commit().map_err(GitError::ParseCommit)?;
        return Ok(amended.parent(0).ok());
    }

    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit().map_err(GitError::ParseCommit)?)),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            Ok(None)
        }
        Err(e) => Err(GitError::ResolveCommit("HEAD".to_string(), e)),
    }
}

/// Compute the set of submodules whose pointer changes in the pending commit.
///
/// Considers every path registered in `.gitmodules` at either snapshot:
/// staged declaration order first, then paths only the base commit declared,
/// in its declaration order. Repositories without submodules yield an empty
/// set.
pub fn diff_gitlinks(
    repo: &Repository,
    base: Option<&Tree<'_>>,
) -> Result<Vec<SubmoduleChange>, GitError> {
    let mut paths = modules_file::staged_module_paths(repo)?;
    for path in modules_file::committed_module_paths(repo, base)? {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let index = repo.index().map_err(GitError::ReadIndex)?;
    let mut changes = Vec::new();

    for path in paths {
        let old = match base {
            Some(tree) => gitlink_at_tree(tree, &path)?,
            None => None,
        };
        let new = gitlink_in_index(&index, &path);

        if old != new {
            debug!(path = %path, ?old, ?new, "submodule pointer changed");
            changes.push(SubmoduleChange { path, old, new });
        }
    }

    Ok(changes)
}

/// The gitlink pointer a tree records for `path`, if any.
///
/// A path that exists but is not a gitlink (a registered submodule replaced
/// by a plain directory or file) counts as absent.
fn gitlink_at_tree(tree: &Tree<'_>, path: &str) -> Result<Option<Oid>, GitError> {
    match tree.get_path(std::path::Path::new(path)) {
        Ok(entry) if entry.filemode() == GITLINK_MODE as i32 => Ok(Some(entry.id())),
        Ok(_) => Ok(None),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(GitError::ReadTree(e)),
    }
}

/// The gitlink pointer the index records for `path`, if any.
fn gitlink_in_index(index: &Index, path: &str) -> Option<Oid> {
    index
        .get_path(std::path::Path::new(path), 0)
        .filter(|entry| entry.mode == GITLINK_MODE)
        .map(|entry| entry.id)
}
