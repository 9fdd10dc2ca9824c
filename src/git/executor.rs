//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log`, optionally limited to one file
    pub fn log_raw(&self, path: Option<&str>) -> Result<String, GitError> {
        self.run(&log_args(path))
    }

    /// Run `git diff <from> <to>`, optionally limited to one file
    pub fn diff_raw(&self, from: &str, to: &str, path: Option<&str>) -> Result<String, GitError> {
        self.run(&diff_args(from, to, path))
    }
}

fn log_args(path: Option<&str>) -> Vec<&str> {
    let mut args = vec![commands::LOG, flags::NO_COLOR, flags::PRETTY_MEDIUM];
    push_path(&mut args, path);
    args
}

fn diff_args<'a>(from: &'a str, to: &'a str, path: Option<&'a str>) -> Vec<&'a str> {
    let mut args = vec![commands::DIFF, flags::NO_COLOR, from, to];
    push_path(&mut args, path);
    args
}

fn push_path<'a>(args: &mut Vec<&'a str>, path: Option<&'a str>) {
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        args.push(flags::PATH_SEPARATOR);
        args.push(path);
    }
}
