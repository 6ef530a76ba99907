//! TestWorld pattern for declarative integration test setup.

use anyhow::{Context, Result};
use assert_cmd::Command;
use gastrack_store::{EntryStore, SqliteStore};
use gastrack_types::FuelEntry;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp data directory the CLI is pointed at.
///
/// # Example
/// ```no_run
/// use gastrack_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_entries(&fixtures::three_fills());
/// let result = world.run(&["history"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".gastrack");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.gastrack); it may not exist yet.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `entries` straight into the default database, bypassing the CLI.
    pub fn with_entries(self, entries: &[FuelEntry]) -> Self {
        self.store()
            .and_then(|store| Ok(store.save_all(entries)?))
            .expect("Failed to seed entries");
        self
    }

    /// Open the database the CLI uses under the default config.
    pub fn store(&self) -> Result<SqliteStore> {
        let path = self.data_dir.join("gastrack.db");
        SqliteStore::open(&path).with_context(|| format!("opening {}", path.display()))
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        // Keep the host's settings out of the run
        cmd.env_remove("GASTRACK_PATH").env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the gastrack binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("gastrack")
            .map_err(|e| anyhow::anyhow!("Failed to find gastrack binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json`, require success and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full_args = args.to_vec();
        full_args.extend(["--format", "json"]);

        let result = self.run(&full_args)?;
        if !result.success() {
            anyhow::bail!("gastrack {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }
}
