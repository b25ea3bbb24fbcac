//! TestRepo helper for integration tests.
//!
//! Provides a temporary svn repository plus a checked-out working copy.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary svn repository with a working copy.
///
/// Layout inside the temp dir: `repo/` (created by svnadmin) and `wc/`
/// (checkout of `repo`). Everything is removed when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create an empty repository and check it out.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        run_checked(
            Command::new("svnadmin")
                .arg("create")
                .arg(repo.repo_path()),
            "svnadmin create",
        );
        run_checked(
            Command::new("svn")
                .args(["checkout", "--quiet", &repo.url()])
                .arg(repo.wc_path()),
            "svn checkout",
        );

        repo
    }

    /// Path to the repository directory.
    pub fn repo_path(&self) -> PathBuf {
        self.dir.path().join("repo")
    }

    /// `file://` URL of the repository.
    pub fn url(&self) -> String {
        format!("file://{}", self.repo_path().display())
    }

    /// Path to the working copy.
    pub fn wc_path(&self) -> PathBuf {
        self.dir.path().join("wc")
    }

    /// Path to a directory that is not a working copy.
    pub fn scratch_path(&self) -> PathBuf {
        let path = self.dir.path().join("scratch");
        fs::create_dir_all(&path).expect("Failed to create scratch directory");
        path
    }

    /// Write a file (relative to the working copy root).
    pub fn write_file(&self, path: &str, content: &str) {
        let full = self.wc_path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write file");
    }

    /// Execute an svn command inside the working copy.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn svn(&self, args: &[&str]) -> String {
        let output = Command::new("svn")
            .args(args)
            .current_dir(self.wc_path())
            .output()
            .expect("Failed to execute svn command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "svn {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Add everything unversioned, commit, and bring the working copy to HEAD.
    pub fn commit(&self, message: &str) {
        self.svn(&["add", "--force", "--quiet", "."]);
        self.svn(&["commit", "--quiet", "--username", "tester", "-m", message]);
        self.svn(&["update", "--quiet"]);
    }

    /// Commit a three-revision history used by most tests.
    ///
    /// r1 "Initial import", r2 "Add feature flag", r3 "Fix feature flag typo"
    pub fn with_history() -> Self {
        let repo = Self::new();

        repo.write_file("README.txt", "hello\n");
        repo.commit("Initial import");

        repo.write_file("src/flags.txt", "feature=on\n");
        repo.commit("Add feature flag");

        repo.write_file("src/flags.txt", "feature=off\n");
        repo.commit("Fix feature flag typo");

        repo
    }
}

fn run_checked(cmd: &mut Command, what: &str) {
    let output = cmd
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute {what}: {e}"));
    if !output.status.success() {
        panic!(
            "{what} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
