//! Subprocess execution for release checks
//!
//! Every external command goes through a [`CommandRunner`] so the checks can
//! be driven by a fake in tests. The system runner is synchronous: it blocks
//! until the child exits and never retries.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{CheckError, CheckResult};


/// Execution options for a single command.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory; inherits the caller's when `None`
    pub cwd: Option<PathBuf>,
    /// Extra environment variables set for the child
    pub envs: Vec<(String, String)>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            cwd: Some(dir.to_path_buf()),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }
}

/// Runs an argument list and returns its captured standard output.
pub trait CommandRunner {
    /// Run `argv` to completion.
    ///
    /// Returns the full stdout on a zero exit. A non-zero exit is returned as
    /// [`CheckError::CommandFailed`] carrying the exit status and both streams.
    fn run(&self, argv: &[&str], options: &CommandOptions) -> CheckResult<String>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[&str], options: &CommandOptions) -> CheckResult<String> {
        let command_line = argv.join(" ");
        let (program, args) = argv.split_first().ok_or_else(|| CheckError::Spawn {
            command: command_line.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = &options.cwd {
            cmd.current_dir(dir);
        }
        for (key, value) in &options.envs {
            cmd.env(key, value);
        }

        tracing::debug!(command = %command_line, "running command");
        let output = cmd.output().map_err(|source| CheckError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::error!("stdout: {stdout}");
        tracing::error!("stderr: {stderr}");
        Err(CheckError::CommandFailed {
            command: command_line,
            status: output.status.code(),
            stdout,
            stderr,
        })
    }
}
