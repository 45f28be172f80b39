//! Filesystem utilities for hdrstamp.
//!
//! Artifacts are always written atomically so a build never compiles a
//! truncated header.

pub mod atomic;

pub use atomic::atomic_write_file;
