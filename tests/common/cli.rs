use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

use super::SAMPLE_SOURCE;

/// Temporary working directory for running `iss`.
pub struct IssWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl IssWorkspace {
    /// Empty workspace.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    /// Workspace with `issues.dat` holding the sample issues.
    pub fn with_sample() -> Self {
        let workspace = Self::new();
        workspace.write_source(SAMPLE_SOURCE);
        workspace
    }

    pub fn write_source(&self, content: &str) {
        fs::write(self.root.join("issues.dat"), content).expect("write source");
    }

    /// Default slot file under `.issues/`.
    pub fn slot_path(&self) -> PathBuf {
        self.root.join(".issues").join("issue-tracker-issues.json")
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug)]
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Run `iss` in the workspace with a clean environment.
pub fn run_iss<I, S>(workspace: &IssWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::cargo_bin("iss").expect("iss binary");
    cmd.current_dir(workspace.path())
        .args(args)
        .env_remove("ISSUES_SOURCE")
        .env_remove("ISSUES_DATA_DIR")
        .env_remove("ISSUES_SLOT")
        .env_remove("ISS_LOG_FORMAT")
        .env_remove("RUST_LOG");

    let output = cmd.output().expect("run iss");
    let result = CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if std::env::var_os("ISS_TEST_TRACE").is_some() {
        eprintln!("[{label}] stdout:\n{}\nstderr:\n{}", result.stdout, result.stderr);
    }
    result
}
