//! Shared testing utilities for issuekit CLI tests.

#![allow(dead_code)]

mod fake_gh;

pub use fake_gh::FakeGh;

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";

/// Testing harness providing an isolated repository directory for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment with `categories.txt` already written.
    pub fn with_categories(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write("categories.txt", content);
        ctx
    }

    /// Path to the repository directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `issuekit` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("issuekit").expect("Failed to locate issuekit binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        cmd
    }

    /// Build a command whose `PATH` resolves `gh` to the fake script.
    pub fn cli_with_gh(&self, gh: &FakeGh) -> Command {
        let mut cmd = self.cli();
        let mut path = OsString::from(gh.bin_dir.as_os_str());
        if let Some(existing) = env::var_os("PATH") {
            path.push(":");
            path.push(existing);
        }
        cmd.env("PATH", path);
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn template(&self, filename: &str) -> String {
        self.read(&format!("{}/{}", TEMPLATE_DIR, filename))
    }

    pub fn template_exists(&self, filename: &str) -> bool {
        self.path(&format!("{}/{}", TEMPLATE_DIR, filename)).exists()
    }
}
