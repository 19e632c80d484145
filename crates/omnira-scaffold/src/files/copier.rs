//! Copying bundled sources and writing generated files

use super::{CopyOutcome, WriteOutcome};
use std::io;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy every file under `src` into `dest`, recreating the directory structure.
///
/// A missing `src` yields [`CopyOutcome::NotFound`] and creates nothing.
pub async fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<CopyOutcome> {
    if !src.is_dir() {
        return Ok(CopyOutcome::NotFound);
    }

    fs::create_dir_all(dest).await?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).await?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::copy(entry.path(), &target).await?;
            tracing::debug!(from = %entry.path().display(), to = %target.display(), "copied");
            copied += 1;
        }
    }

    Ok(CopyOutcome::Copied(copied))
}

/// Copy a single file, creating the destination's parent directory.
///
/// A missing `src` yields [`CopyOutcome::NotFound`].
pub async fn copy_file(src: &Path, dest: &Path) -> io::Result<CopyOutcome> {
    if !src.is_file() {
        return Ok(CopyOutcome::NotFound);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::copy(src, dest).await?;
    tracing::debug!(from = %src.display(), to = %dest.display(), "copied");

    Ok(CopyOutcome::Copied(1))
}

/// Write `contents` to `path`, replacing whatever is there
pub async fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await
}

/// Write `contents` only when `path` does not exist yet
pub async fn write_file_if_absent(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    if fs::try_exists(path).await? {
        tracing::debug!(path = %path.display(), "exists, leaving untouched");
        return Ok(WriteOutcome::Skipped);
    }
    write_file(path, contents).await?;
    Ok(WriteOutcome::Written)
}
