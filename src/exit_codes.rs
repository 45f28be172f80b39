//! Exit code constants for the hdrstamp CLI.
//!
//! - 0: Success
//! - 1: Missing output path (build configuration error)
//! - 2: Artifact could not be written
//! - 3: Git lookup failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: the output path argument was not supplied.
pub const USAGE_ERROR: i32 = 1;

/// Write failure: parent directory, temp file, write, sync, or rename failed.
pub const WRITE_FAILURE: i32 = 2;

/// Git failure: git could not be run or `git describe` exited non-zero.
pub const GIT_FAILURE: i32 = 3;
