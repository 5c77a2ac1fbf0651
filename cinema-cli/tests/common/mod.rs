//! Common test utilities for CLI integration tests.
//!
//! Every command runs with its own temporary working directory and `HOME`,
//! and with the `CINEMA_*` environment variables cleared, so user settings
//! on the host never leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const CINEMA_ENV_VARS: &[&str] = &[
    "CINEMA_CONFIG",
    "CINEMA_OUTPUT_FORMAT",
    "CINEMA_LOG_MODE",
    "CINEMA_ROWS",
    "CINEMA_SEATS_PER_ROW",
    "CINEMA_STANDARD_PRICE",
    "CINEMA_PREMIUM_PRICE",
    "CINEMA_CAPACITY_THRESHOLD",
];

/// Isolated environment for running the `cinema` binary.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cinema").expect("Failed to find cinema binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in CINEMA_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run the interactive session with a scripted stdin.
    pub fn session(&self, args: &[&str], script: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(args).write_stdin(script.to_string());
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// The worked 2x3 example: buy (1,1), try (1,1) again, buy (2,2), statistics, exit.
#[allow(dead_code)]
pub const SMALL_ROOM_SCRIPT: &str = "2\n3\n2\n1\n1\n2\n1\n1\n2\n2\n3\n0\n";
