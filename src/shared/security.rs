use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large manifests or license files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates the directory an analysis is rooted at and returns its canonical form
///
/// # Security
/// The root itself must not be a symbolic link; it is canonicalized so that
/// every relative path handed out by the scan tree stays under it.
///
/// # Errors
/// Returns `AnalysisError::InvalidScanRoot` if the path does not exist,
/// is a symbolic link, or is not a directory
pub fn validate_scan_root(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: String| AnalysisError::InvalidScanRoot {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Scan root is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    let canonical = path
        .canonicalize()
        .map_err(|e| invalid(format!("Failed to canonicalize path: {}", e)))?;

    Ok(canonical)
}

/// Validates that a path is a regular file (not a directory or symlink) and returns its size
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the metadata cannot be read, the path is a symbolic
/// link, or the path is not a regular file. `NotFound` is passed through as
/// the underlying `std::io::Error` so callers can downcast it.
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
