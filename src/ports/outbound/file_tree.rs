use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileTree port for read-only filesystem access
///
/// Two trees exist during an analysis: the scanned project (paths relative
/// to the scan root, used for manifests and `vendor`) and the host
/// filesystem (absolute paths into the Go module cache). Both sit behind
/// this one capability so the algorithms never branch on which is which.
///
/// Absence is not an error: lookups of missing paths return `Ok(None)`.
pub trait FileTree {
    /// Reads a whole file
    ///
    /// # Returns
    /// `None` if the file does not exist
    ///
    /// # Errors
    /// Returns an error if the path exists but cannot be read, is not a
    /// regular file, or exceeds the size limit
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Lists the direct children of a directory
    ///
    /// # Returns
    /// `None` if the directory does not exist
    fn read_dir(&self, path: &Path) -> Result<Option<Vec<PathBuf>>>;

    /// Walks a directory depth-first and returns the regular files accepted by `include`
    ///
    /// Entries are visited in lexical file-name order so results are stable
    /// across platforms. Returned paths are in the same form as `root`
    /// (relative for the scanned tree, absolute for the host).
    ///
    /// # Returns
    /// `None` if `root` does not exist
    fn walk_files(
        &self,
        root: &Path,
        include: &dyn Fn(&Path) -> bool,
    ) -> Result<Option<Vec<PathBuf>>>;

    /// Whether the path exists and is a directory
    fn dir_exists(&self, path: &Path) -> bool;
}
