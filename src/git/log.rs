//! Submodule commit listing.

use git2::{Oid, Repository};

use crate::error::GitError;

/// One submodule commit introduced by the pending pointer advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLogEntry {
    pub id: Oid,
    pub subject: String,
}

/// List the commits reachable from `new` but not from `old` in the
/// submodule at `path`, newest-first.
///
/// The submodule repository is opened through the outer working tree, which
/// follows the `.git` gitfile indirection git uses for submodule checkouts.
pub fn submodule_commits(
    outer: &Repository,
    path: &str,
    old: Oid,
    new: Oid,
) -> Result<Vec<CommitLogEntry>, GitError> {
    let workdir = outer.workdir().ok_or(GitError::NoWorkTree)?;

    let sub = Repository::open(workdir.join(path)).map_err(|e| GitError::OpenSubmodule {
        path: path.to_string(),
        source: e,
    })?;

    let mut revwalk = sub.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(new).map_err(GitError::RevwalkError)?;
    revwalk.hide(old).map_err(GitError::RevwalkError)?;

    let mut entries = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = sub.find_commit(oid).map_err(GitError::ParseCommit)?;
        entries.push(CommitLogEntry {
            id: oid,
            subject: commit.summary().unwrap_or("").to_string(),
        });
    }

    Ok(entries)
}
