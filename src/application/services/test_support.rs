//! In-memory doubles for the outbound ports, shared by the service tests.
//!
//! The stub parser reads a line format instead of the real go.mod grammar:
//! `root <name>`, `direct <name> <version>`, `indirect <name> <version>`,
//! and `invalid` anywhere makes the parse fail. Lockfiles are
//! `<name> <version>` per line.

use crate::module_inventory::domain::{LicenseFile, LicenseFinding, Package, Relationship};
use crate::ports::outbound::{FileTree, LicenseClassifier, ManifestParser, ParseMode, ParsedManifest};
use crate::shared::Result;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct InMemoryFileTree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl InMemoryFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.as_bytes().to_vec());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    fn has_descendants(&self, path: &Path) -> bool {
        self.files.keys().any(|f| f != path && f.starts_with(path))
            || self.dirs.iter().any(|d| d.starts_with(path))
    }
}

impl FileTree for InMemoryFileTree {
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }

    fn read_dir(&self, path: &Path) -> Result<Option<Vec<PathBuf>>> {
        if !self.has_descendants(path) {
            return Ok(None);
        }
        let children: BTreeSet<PathBuf> = self
            .files
            .keys()
            .filter(|f| *f != path)
            .filter_map(|f| f.strip_prefix(path).ok())
            .filter_map(|rel| rel.components().next())
            .map(|c| path.join(c.as_os_str()))
            .collect();
        Ok(Some(children.into_iter().collect()))
    }

    fn walk_files(
        &self,
        root: &Path,
        include: &dyn Fn(&Path) -> bool,
    ) -> Result<Option<Vec<PathBuf>>> {
        if !self.has_descendants(root) {
            return Ok(None);
        }
        Ok(Some(
            self.files
                .keys()
                .filter(|f| f.starts_with(root) && include(f.as_path()))
                .cloned()
                .collect(),
        ))
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.has_descendants(path)
    }
}

#[derive(Default)]
pub struct StubParser {
    pub modes: RefCell<Vec<ParseMode>>,
}

impl StubParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ManifestParser for StubParser {
    fn parse_manifest(&self, content: &[u8], mode: &ParseMode) -> Result<ParsedManifest> {
        self.modes.borrow_mut().push(*mode);
        let text = String::from_utf8_lossy(content);
        let mut packages = Vec::new();
        let mut module_path = None;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                ["root", name] => {
                    module_path = Some(name.to_string());
                    packages.push(
                        Package::new(name.to_string(), String::new())?
                            .with_relationship(Relationship::Root),
                    );
                }
                ["direct", name, version] => packages.push(
                    Package::new(name.to_string(), version.to_string())?
                        .with_relationship(Relationship::Direct),
                ),
                ["indirect", name, version] => packages.push(
                    Package::new(name.to_string(), version.to_string())?
                        .with_relationship(Relationship::Indirect),
                ),
                _ => anyhow::bail!("unexpected line: {}", line),
            }
        }
        Ok(ParsedManifest::new(packages, module_path))
    }

    fn parse_lockfile(&self, content: &[u8]) -> Result<Vec<Package>> {
        let text = String::from_utf8_lossy(content);
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [name, version] => Package::new(name.to_string(), version.to_string()),
                _ => anyhow::bail!("malformed go.sum line: {}", line),
            })
            .collect()
    }
}

/// Content `license:MIT,Apache-2.0` yields those findings, `error` fails,
/// anything else is not a license.
#[derive(Default)]
pub struct CountingClassifier {
    pub calls: Cell<usize>,
}

impl CountingClassifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LicenseClassifier for CountingClassifier {
    fn classify(
        &self,
        path: &Path,
        content: &[u8],
        confidence_level: f64,
    ) -> Result<Option<LicenseFile>> {
        self.calls.set(self.calls.get() + 1);
        let text = String::from_utf8_lossy(content);
        if text.trim() == "error" {
            anyhow::bail!("classifier failure");
        }
        let Some(names) = text.trim().strip_prefix("license:") else {
            return Ok(None);
        };
        let findings = names
            .split(',')
            .map(|n| LicenseFinding::new(n.trim(), confidence_level))
            .collect();
        Ok(Some(LicenseFile::new(path.display().to_string(), findings)))
    }
}
