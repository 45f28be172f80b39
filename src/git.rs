//! Git command runner for hdrstamp.
//!
//! Wraps `git` invocations with captured stdout/stderr and maps any failure
//! to [`GenError::GitFailure`].

use crate::error::{GenError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On exit code 0
/// * `Err(GenError::GitFailure)` - If git cannot be spawned or exits non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            GenError::GitFailure(format!(
                "failed to execute git {} in '{}': {} (is git installed?)",
                args.first().unwrap_or(&""),
                cwd.display(),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(GenError::GitFailure(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Describe `HEAD` of the repository at `repo` using the nearest tag.
///
/// Equivalent to `git describe --tags`, so lightweight tags count.
///
/// # Arguments
///
/// * `repo` - Any directory inside the repository to describe
///
/// # Returns
///
/// * `Ok(String)` - The trimmed description, e.g. `v1.2.3` or `v1.2.3-4-gdeadbee`
/// * `Err(GenError::GitFailure)` - If git cannot run, `repo` is not a repository,
///   no tag is reachable from `HEAD`, or git prints nothing
///
/// # Example
///
/// ```no_run
/// use hdrstamp::git::describe_tags;
/// use std::path::Path;
///
/// let version = describe_tags(Path::new("."))?;
/// println!("building {}", version);
/// # Ok::<(), hdrstamp::error::GenError>(())
/// ```
pub fn describe_tags<P: AsRef<Path>>(repo: P) -> Result<String> {
    let output = run_git(repo, &["describe", "--tags"])?;
    if output.stdout.is_empty() {
        return Err(GenError::GitFailure(
            "git describe produced no output".to_string(),
        ));
    }
    Ok(output.stdout)
}
