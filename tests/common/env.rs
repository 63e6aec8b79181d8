//! Test environment builder for isolated loadplan testing.
//!
//! Provides `TestEnv` - an isolated test environment with temp directories
//! for both project and home, plus helpers to run loadplan CLI commands.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a loadplan CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse each non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON: {line:?}: {e}"))
            })
            .collect()
    }

    /// The final JSON object (the command result in `--json` mode)
    pub fn json_result(&self) -> serde_json::Value {
        self.json_lines()
            .pop()
            .unwrap_or_else(|| panic!("no JSON on stdout:\n{}", self.combined_output()))
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated project directory (the CLI's working directory)
/// - Isolated home directory (so no user config leaks in)
/// - CLI command execution helpers
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    /// Run loadplan CLI in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run loadplan CLI from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_loadplan"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("LOADPLAN_CATALOG")
            .env_remove("LOADPLAN_VERBOSITY")
            .env_remove("LOADPLAN_JSON")
            .env_remove("LOADPLAN_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute loadplan");
        output_to_result(output)
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    project_files: Vec<(String, String)>,
    home_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            project_files: Vec::new(),
            home_files: Vec::new(),
        }
    }

    /// Write `content` as the default `orders.toml` catalog
    pub fn with_catalog(self, content: &str) -> Self {
        self.with_project_file("orders.toml", content)
    }

    /// Write `content` as the project `loadplan.toml`
    pub fn with_project_config(self, content: &str) -> Self {
        self.with_project_file("loadplan.toml", content)
    }

    pub fn with_project_file(mut self, relative: &str, content: &str) -> Self {
        self.project_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    /// Write a file under the isolated `$XDG_CONFIG_HOME`
    pub fn with_user_config_file(mut self, relative: &str, content: &str) -> Self {
        self.home_files
            .push((format!(".config/{relative}"), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");

        for (relative, content) in &self.project_files {
            write_file(project_root.path(), relative, content);
        }
        for (relative, content) in &self.home_files {
            write_file(home_dir.path(), relative, content);
        }

        TestEnv {
            project_root,
            home_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
}
