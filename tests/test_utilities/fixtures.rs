use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MIT: &str = "MIT License\n\nCopyright (c) The Authors";
pub const APACHE: &str = "Apache License\nVersion 2.0, January 2004";
pub const BSD: &str = "BSD 3-Clause License";

/// A project directory and a GOPATH, both on disk
pub struct Workspace {
    pub project: TempDir,
    pub gopath: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            gopath: TempDir::new().unwrap(),
        }
    }

    pub fn project_file(&self, rel: &str, content: &str) -> &Self {
        write(&self.project.path().join(rel), content);
        self
    }

    /// Writes a file into `$GOPATH/pkg/mod/<escaped dir>`
    pub fn cached_file(&self, module_dir: &str, rel: &str, content: &str) -> &Self {
        write(&self.mod_dir().join(module_dir).join(rel), content);
        self
    }

    pub fn mod_dir(&self) -> PathBuf {
        self.gopath.path().join("pkg").join("mod")
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
