use super::disk;
use crate::ports::outbound::FileTree;
use crate::shared::security::validate_scan_root;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// ScanFileTree adapter for the project being analyzed
///
/// Every path in and out of this tree is relative to the scan root, with
/// the empty path naming the root itself. Paths that would climb out of the
/// root are treated as absent.
#[derive(Debug, Clone)]
pub struct ScanFileTree {
    root: PathBuf,
}

impl ScanFileTree {
    /// Opens a scan tree rooted at `root`
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidScanRoot` if the root is missing, a
    /// symbolic link or not a directory
    pub fn new(root: &Path) -> Result<Self> {
        let root = validate_scan_root(root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &Path) -> Option<PathBuf> {
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            tracing::debug!(path = %rel.display(), "Path outside the scan root ignored");
            return None;
        }
        Some(self.root.join(rel))
    }

    fn relativize(&self, abs: PathBuf) -> Result<PathBuf> {
        abs.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .with_context(|| {
                format!(
                    "strip prefix {} from {}",
                    self.root.display(),
                    abs.display()
                )
            })
    }
}

impl FileTree for ScanFileTree {
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match self.resolve(path) {
            Some(abs) => disk::read_file(&abs),
            None => Ok(None),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Option<Vec<PathBuf>>> {
        let Some(abs) = self.resolve(path) else {
            return Ok(None);
        };
        disk::read_dir(&abs)?
            .map(|children| {
                children
                    .into_iter()
                    .map(|child| self.relativize(child))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()
    }

    fn walk_files(
        &self,
        root: &Path,
        include: &dyn Fn(&Path) -> bool,
    ) -> Result<Option<Vec<PathBuf>>> {
        let Some(abs) = self.resolve(root) else {
            return Ok(None);
        };
        disk::walk_files(&abs, include, |p| self.relativize(p))
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_some_and(|abs| disk::dir_exists(&abs))
    }
}
