// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Staging state inspection.
//!
//! Parses `git status --porcelain` output to decide whether anything is
//! staged for commit. The porcelain format is machine-stable; the first
//! column of each line carries the index status, so a line starting with
//! `"A "`, `"M "` or `"R "` means a staged addition, modification or
//! rename.

use crate::error::{CmtError, GitError, Result};
use std::process::Command;

/// Line prefixes that mark a staged change in porcelain output.
const STAGED_PREFIXES: &[&str] = &["A ", "M ", "R "];

/// Capability to run an external command and capture its stdout.
///
/// Injected into the stage check so tests can substitute canned output
/// instead of spawning git.
pub trait CommandRunner {
    /// Run `program` with `args`, returning captured stdout on success.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runner that spawns real processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            CmtError::Git(GitError::CommandFailed {
                command: format!("{} {}", program, args.join(" ")),
                message: e.to_string(),
            })
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CmtError::Git(GitError::CommandFailed {
                command: format!("{} {}", program, args.join(" ")),
                message: stderr.trim().to_string(),
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check whether any change is staged for commit.
///
/// Returns `Ok(false)` for empty output (a clean tree is not an error).
/// A failing status command is surfaced verbatim; the staged-state result
/// must not be trusted when an error is returned.
pub fn check_add_stage(runner: &dyn CommandRunner) -> Result<bool> {
    let out = runner.run("git", &["status", "--porcelain"])?;

    for line in out.lines() {
        if STAGED_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runner returning canned porcelain output.
    struct FakeRunner {
        output: std::result::Result<String, String>,
    }

    impl FakeRunner {
        fn ok(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                output: Err(message.to_string()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<String> {
            match &self.output {
                Ok(out) => Ok(out.clone()),
                Err(message) => Err(CmtError::Git(GitError::CommandFailed {
                    command: "git status --porcelain".to_string(),
                    message: message.clone(),
                })),
            }
        }
    }

    #[test]
    fn test_staged_added_file() {
        let runner = FakeRunner::ok("A  src/main.rs\n");
        assert!(check_add_stage(&runner).unwrap());
    }

    #[test]
    fn test_staged_modified_file() {
        let runner = FakeRunner::ok("?? notes.txt\nM  src/lib.rs\n");
        assert!(check_add_stage(&runner).unwrap());
    }

    #[test]
    fn test_staged_renamed_file() {
        let runner = FakeRunner::ok("R  old.rs -> new.rs\n");
        assert!(check_add_stage(&runner).unwrap());
    }

    #[test]
    fn test_no_staged_changes() {
        let runner = FakeRunner::ok(" M src/lib.rs\n?? untracked.txt\n");
        assert!(!check_add_stage(&runner).unwrap());
    }

    #[test]
    fn test_empty_output_is_not_an_error() {
        let runner = FakeRunner::ok("");
        assert!(!check_add_stage(&runner).unwrap());
    }

    #[test]
    fn test_command_failure_is_propagated() {
        let runner = FakeRunner::failing("fatal: not a git repository");
        let err = check_add_stage(&runner).unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn test_check_add_stage_against_real_git() {
        let dir = tempfile::TempDir::new().unwrap();

        std::process::Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
        std::process::Command::new("git")
            .args(["add", "test.txt"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        // Run the status check from inside the repo.
        struct DirRunner(std::path::PathBuf);
        impl CommandRunner for DirRunner {
            fn run(&self, program: &str, args: &[&str]) -> Result<String> {
                let output = std::process::Command::new(program)
                    .args(args)
                    .current_dir(&self.0)
                    .output()
                    .unwrap();
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
        }

        let runner = DirRunner(dir.path().to_path_buf());
        assert!(check_add_stage(&runner).unwrap());
    }
}
