#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config directory and database for one test.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("test.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    /// `zeitkonto --db <tmp>` with the config dir pointed at the tempdir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("zeitkonto");
        cmd.env("ZEITKONTO_CONFIG_DIR", self.dir.path())
            .env_remove("ZEITKONTO_LOG")
            .current_dir(self.dir.path())
            .args(["--db", &self.db]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add a work day and return the id printed by `add`.
    pub fn add(&self, date: &str, start: &str, end: &str) -> String {
        let out = self
            .cmd()
            .args(["add", date, "--start", start, "--end", end])
            .output()
            .expect("run add");
        assert!(out.status.success(), "add failed: {:?}", out);
        let stdout = String::from_utf8_lossy(&out.stdout);
        extract_id(&stdout).expect("id in add output")
    }

    /// Small dataset over two months
    pub fn seed(&self) {
        self.cmd().arg("init").assert().success();
        self.add("2025-09-01", "09:00", "17:00");
        self.add("2025-09-15", "08:00", "16:30");
        self.add("2025-10-01", "10:00", "12:00");
    }
}

pub fn extract_id(output: &str) -> Option<String> {
    let start = output.find("[id ")? + 4;
    let end = output[start..].find(']')? + start;
    Some(output[start..end].to_string())
}
