//! Error types for subnote modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to resolve '{0}': {1}")]
    ResolveCommit(String, #[source] git2::Error),

    #[error("Failed to read the index: {0}")]
    ReadIndex(#[source] git2::Error),

    #[error("Failed to read tree entry: {0}")]
    ReadTree(#[source] git2::Error),

    #[error("Failed to read blob: {0}")]
    ReadBlob(#[source] git2::Error),

    #[error("Repository has no working tree")]
    NoWorkTree,

    #[error("Failed to open submodule '{path}': {source}")]
    OpenSubmodule {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to walk submodule history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),
}

/// Errors from a hook invocation.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Git operation failed: {0}")]
    Git(#[from] GitError),

    #[error("Failed to read commit message file: {0}")]
    ReadMessage(#[source] std::io::Error),

    #[error("Failed to write commit message file: {0}")]
    WriteMessage(#[source] std::io::Error),
}

/// Errors from hook installation.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("A prepare-commit-msg hook already exists at {}. Use --force to overwrite.", .0.display())]
    HookExists(PathBuf),

    #[error("Failed to locate the subnote executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("Failed to write hook script: {0}")]
    WriteHook(#[source] std::io::Error),
}
