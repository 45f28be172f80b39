//! Atomic artifact writes.
//!
//! A downstream compile step must never see a half-written header, so every
//! write follows the same pattern:
//!
//! 1. Resolve symlinks so the file they point at is the one replaced
//! 2. Create missing parent directories
//! 3. Write the content to a temporary sibling file
//! 4. Sync it to disk (fsync)
//! 5. Rename it over the target
//!
//! The temporary file lives in the target's directory (named
//! `.{filename}.{pid}.tmp`, or `.hdrstamp.{pid}.tmp` when that would exceed
//! the filename limit) so the rename never crosses a filesystem. It is
//! removed on any failure after creation.

use crate::error::{GenError, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest filename (in bytes) common filesystems accept.
const NAME_MAX: usize = 255;

/// Symlink hops followed before giving up, matching Linux `MAXSYMLINKS`.
const MAX_SYMLINK_HOPS: usize = 40;

/// Atomically write bytes to a file, replacing any existing content.
///
/// If `path` is a symlink, the file it points to is replaced and the link is
/// kept. Missing parent directories are created; existing ones are left alone.
///
/// # Arguments
///
/// * `path` - The target file path (absolute or relative to the working directory)
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - Once the content is synced and renamed over the target
/// * `Err(GenError::WriteFailure)` - If a directory, the temp file, the write,
///   the sync, or the rename fails; the target keeps its previous state
///
/// # Example
///
/// ```no_run
/// use hdrstamp::fs::atomic::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("build/generated/config.hpp"), b"#pragma once\n")?;
/// # Ok::<(), hdrstamp::error::GenError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = resolve_symlinks(path.as_ref())?;

    ensure_parent_dir(&path)?;

    let temp_path = generate_temp_path(&path)?;
    write_and_sync(&path, &temp_path, content)?;
    replace(&temp_path, &path)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Follow `path` through any chain of symlinks to the file it names.
///
/// Dangling links resolve to their (not yet existing) destination, so the
/// write creates it. Anything that is not a symlink is returned unchanged.
fn resolve_symlinks(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_SYMLINK_HOPS {
        let is_link = fs::symlink_metadata(&current)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            return Ok(current);
        }

        let destination = fs::read_link(&current).map_err(|e| {
            GenError::write_failure(
                path,
                format!("cannot read symlink '{}': {}", current.display(), e),
            )
        })?;
        current = match current.parent() {
            Some(parent) if destination.is_relative() => parent.join(destination),
            _ => destination,
        };
    }

    Err(GenError::write_failure(path, "too many levels of symbolic links"))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GenError::write_failure(
                path,
                format!("cannot create directory '{}': {}", parent.display(), e),
            )
        })?;
    }
    Ok(())
}

/// Temporary sibling path for `target`.
///
/// Built as an `OsString` so filenames that are not UTF-8 still work.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new(""));
    let filename = target
        .file_name()
        .ok_or_else(|| GenError::write_failure(target, "path does not name a file"))?;

    let suffix = format!(".{}.tmp", std::process::id());
    let mut temp_name = OsString::from(".");
    if 1 + filename.len() + suffix.len() <= NAME_MAX {
        temp_name.push(filename);
    } else {
        temp_name.push("hdrstamp");
    }
    temp_name.push(suffix);

    Ok(parent.join(temp_name))
}

fn write_and_sync(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| {
        GenError::write_failure(
            target,
            format!(
                "cannot create temporary file '{}': {}",
                temp_path.display(),
                e
            ),
        )
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(temp_path);
        return Err(GenError::write_failure(target, e));
    }

    Ok(())
}

/// Rename `source` over `target`. `rename` replaces an existing target on
/// every platform std supports.
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        GenError::write_failure(target, e)
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file. Best effort.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
