use super::disk;
use crate::ports::outbound::FileTree;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// HostFileTree adapter for the host filesystem
///
/// Paths are used as given, so this is the tree the module cache
/// (`$GOPATH/pkg/mod`) is read through.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileTree;

impl HostFileTree {
    pub fn new() -> Self {
        Self
    }
}

impl FileTree for HostFileTree {
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        disk::read_file(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Option<Vec<PathBuf>>> {
        disk::read_dir(path)
    }

    fn walk_files(
        &self,
        root: &Path,
        include: &dyn Fn(&Path) -> bool,
    ) -> Result<Option<Vec<PathBuf>>> {
        disk::walk_files(root, include, Ok)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        disk::dir_exists(path)
    }
}
