//! Guarded disk access shared by the `FileTree` adapters.

use crate::shared::error::AnalysisError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads a regular file after the symlink and size checks
///
/// A missing file is `Ok(None)`.
pub(super) fn read_file(path: &Path) -> Result<Option<Vec<u8>>> {
    let size = match validate_regular_file(path) {
        Ok(size) => size,
        Err(e) if is_not_found(&e) => return Ok(None),
        Err(e) => return Err(e),
    };
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AnalysisError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()),
    }
}

/// Lists a directory's children sorted by name; a missing directory is `Ok(None)`
pub(super) fn read_dir(path: &Path) -> Result<Option<Vec<PathBuf>>> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read directory {}", path.display()))
        }
    };

    let mut children = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read directory {}", path.display()))?;
    children.sort();
    Ok(Some(children))
}

/// Walks `root` depth-first in file-name order, yielding regular files only
///
/// Symbolic links are never followed. Each file's path is passed through
/// `map` before `include` sees it, so callers filter on the path form they
/// hand out.
pub(super) fn walk_files(
    root: &Path,
    include: &dyn Fn(&Path) -> bool,
    map: impl Fn(PathBuf) -> Result<PathBuf>,
) -> Result<Option<Vec<PathBuf>>> {
    if !root.is_dir() {
        return Ok(None);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = map(entry.into_path())?;
        if include(&path) {
            files.push(path);
        }
    }

    Ok(Some(files))
}

pub(super) fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
