//! Artifact generation.
//!
//! Each operation validates the invocation, resolves the value to embed,
//! renders the header template, and writes it atomically to the output path.
//! An existing file at the output path is always fully replaced.

use crate::clock::Clock;
use crate::error::{GenError, Result};
use crate::fs::atomic_write_file;
use crate::git;
use crate::template::HeaderTemplate;
use std::path::Path;

/// Check that an output path was supplied.
///
/// A missing path is a build configuration error and is never defaulted.
pub fn require_output(output: Option<&Path>) -> Result<&Path> {
    match output {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(GenError::MissingArgument),
    }
}

/// Write the `GENERATED_TIME` header to `output`.
///
/// The clock is read exactly once.
pub fn generate(output: Option<&Path>, clock: &dyn Clock) -> Result<()> {
    let output = require_output(output)?;
    let now = clock.now();
    let header = HeaderTemplate::build_date(&now);
    atomic_write_file(output, &header.render())
}

/// Write the `GIT_VERSION` header for the repository at `repo` to `output`.
///
/// Nothing is written if `git describe` fails.
pub fn generate_git_version(output: Option<&Path>, repo: &Path) -> Result<()> {
    let output = require_output(output)?;
    let describe = git::describe_tags(repo)?;
    let header = HeaderTemplate::git_version(describe);
    atomic_write_file(output, &header.render())
}
