//! Submodule registration metadata (`.gitmodules`) access.
//!
//! Paths are returned in declaration order, which fixes the order changes
//! appear in the generated message block. Malformed or missing registration
//! data means "no submodules", never an error.

use std::path::Path;

use git2::{ErrorCode, Repository, Tree};

use crate::error::GitError;

const MODULES_FILE: &str = ".gitmodules";

/// Submodule paths registered in the staged snapshot.
///
/// Prefers the `.gitmodules` blob in the index (the snapshot that will
/// become the new commit); falls back to the working tree copy when the
/// file is not staged.
pub fn staged_module_paths(repo: &Repository) -> Result<Vec<String>, GitError> {
    let index = repo.index().map_err(GitError::ReadIndex)?;

    if let Some(entry) = index.get_path(Path::new(MODULES_FILE), 0) {
        let blob = repo.find_blob(entry.id).map_err(GitError::ReadBlob)?;
        return Ok(parse_module_paths(&String::from_utf8_lossy(blob.content())));
    }

    if let Some(workdir) = repo.workdir() {
        let file = workdir.join(MODULES_FILE);
        if file.exists() {
            let content = std::fs::read_to_string(&file).unwrap_or_default();
            return Ok(parse_module_paths(&content));
        }
    }

    Ok(Vec::new())
}

/// Submodule paths registered in a committed tree, or none without a tree.
pub fn committed_module_paths(
    repo: &Repository,
    tree: Option<&Tree<'_>>,
) -> Result<Vec<String>, GitError> {
    let Some(tree) = tree else {
        return Ok(Vec::new());
    };

    match tree.get_path(Path::new(MODULES_FILE)) {
        Ok(entry) => {
            let blob = repo.find_blob(entry.id()).map_err(GitError::ReadBlob)?;
            Ok(parse_module_paths(&String::from_utf8_lossy(blob.content())))
        }
        Err(e) if e.code() == ErrorCode::NotFound => Ok(Vec::new()),
        Err(e) => Err(GitError::ReadTree(e)),
    }
}

/// Extract the declared submodule paths from `.gitmodules` content.
///
/// Tolerant line-based scan: only `[submodule "..."]` sections and their
/// first `path = ...` entry are considered, anything unparsable is skipped.
pub fn parse_module_paths(content: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut in_submodule = false;
    let mut section_done = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            in_submodule = line.starts_with("[submodule");
            section_done = false;
            continue;
        }

        if !in_submodule || section_done {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "path" {
                let value = value.trim();
                if !value.is_empty() && !paths.iter().any(|p| p == value) {
                    paths.push(value.to_string());
                }
                section_done = true;
            }
        }
    }

    paths
}
