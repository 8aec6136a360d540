#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway documents directory plus an isolated (absent) config file.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn doc(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `wordsvc` pointed at this directory, ignoring the user's config and env.
    pub fn cmd(&self) -> Command {
        self.cmd_in(self.dir.path())
    }

    pub fn cmd_in(&self, documents_dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("wordsvc").unwrap();
        cmd.env_remove("WORDSVC_DOCUMENTS_DIR")
            .env_remove("WORDSVC_LOG")
            .arg("--config")
            .arg(self.dir.path().join("no-such-config.json"))
            .arg("-d")
            .arg(documents_dir);
        cmd
    }
}
