#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ADMIN: &str = "admin123";

/// Isolated station: its own config home and data directory.
pub struct TestStation {
    pub home: TempDir,
}

impl TestStation {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join("data")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// `staffclock` bound to this station, without inherited admin credentials.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("staffclock");
        cmd.env("STAFFCLOCK_HOME", self.home.path())
            .env_remove("STAFFCLOCK_ADMIN_PASS")
            .env_remove("STAFFCLOCK_LOG")
            .arg("--data")
            .arg(self.data_dir());
        cmd
    }

    pub fn init(&self) -> &Self {
        self.cmd().args(["--test", "init"]).assert().success();
        self
    }

    pub fn clock(&self, kind: &str, staff_id: &str) -> &Self {
        self.cmd().args(["clock", kind, staff_id]).assert().success();
        self
    }

    pub fn slot(&self, key: &str) -> String {
        read(&self.data_dir().join(format!("{key}.json")))
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}
