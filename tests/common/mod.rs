//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Commit, IndexEntry, IndexTime, Oid, Repository, Signature};

/// An outer git repository in a temp directory, with helpers for staging
/// gitlink entries the way `git submodule add` / `git add <submodule>` do.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn workdir(&self) -> &Path {
        self.repo.workdir().expect("Test repo has a working tree")
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write and stage a file in the working tree.
    pub fn stage_file(&self, name: &str, content: &str) {
        std::fs::write(self.workdir().join(name), content).expect("Failed to write file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(name))
            .expect("Failed to add file to index");
        index.write().expect("Failed to write index");
    }

    /// Write and stage a `.gitmodules` file declaring the given
    /// (name, path) submodules in order.
    pub fn stage_gitmodules(&self, modules: &[(&str, &str)]) {
        let mut content = String::new();
        for (name, path) in modules {
            content.push_str(&format!(
                "[submodule \"{}\"]\n\tpath = {}\n\turl = ../{}\n",
                name, path, name
            ));
        }
        self.stage_file(".gitmodules", &content);
    }

    /// Stage a gitlink entry recording `id` for `path`.
    pub fn stage_gitlink(&self, path: &str, id: Oid) {
        let entry = IndexEntry {
            ctime: IndexTime::new(0, 0),
            mtime: IndexTime::new(0, 0),
            dev: 0,
            ino: 0,
            mode: 0o160000,
            uid: 0,
            gid: 0,
            file_size: 0,
            id,
            flags: 0,
            flags_extended: 0,
            path: path.as_bytes().to_vec(),
        };

        let mut index = self.repo.index().expect("Failed to get index");
        index.add(&entry).expect("Failed to add gitlink entry");
        index.write().expect("Failed to write index");
    }

    /// Remove a staged entry (used to stage a submodule removal).
    pub fn unstage(&self, path: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .remove(Path::new(path), 0)
            .expect("Failed to remove index entry");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is currently staged. Returns the commit OID.
    pub fn commit_staged(&self, message: &str) -> Oid {
        let sig = self.signature();

        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a nested repository at `name` inside the working tree and
    /// register it: `.gitmodules` entry plus a staged gitlink for its HEAD.
    ///
    /// Only usable for single-submodule setups; multi-submodule tests call
    /// `stage_gitmodules` themselves so declaration order stays explicit.
    pub fn add_submodule(&self, name: &str) -> SubRepo {
        let sub = SubRepo::init(self.workdir().join(name));
        let initial = sub.commit("Initial commit");
        self.stage_gitmodules(&[(name, name)]);
        self.stage_gitlink(name, initial);
        sub
    }

    /// Write a draft commit message file under `.git` and return its path.
    pub fn write_message_file(&self, content: &str) -> PathBuf {
        let path = self.repo.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, content).expect("Failed to write message file");
        path
    }
}

/// A nested repository standing in for a submodule checkout.
pub struct SubRepo {
    pub repo: Repository,
    pub path: PathBuf,
}

impl SubRepo {
    /// Initialize a repository at the given path (inside an outer working
    /// tree).
    pub fn init(path: PathBuf) -> Self {
        let repo = Repository::init(&path).expect("Failed to init nested repo");
        Self { repo, path }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create an empty commit (no tree changes) with the given message.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    pub fn head(&self) -> Oid {
        self.repo
            .head()
            .expect("Failed to read HEAD")
            .peel_to_commit()
            .expect("Failed to peel HEAD")
            .id()
    }
}

/// Read a message file back as its lines.
pub fn read_message_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read message file")
        .lines()
        .map(str::to_string)
        .collect()
}
