use super::Package;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Application aggregate: one manifest and the packages it resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Manifest location relative to the scan root
    pub file_path: PathBuf,
    pub packages: Vec<Package>,
}

impl Application {
    pub fn new(file_path: PathBuf, packages: Vec<Package>) -> Self {
        Self {
            file_path,
            packages,
        }
    }

    /// Index of the main module, if the manifest declared one
    pub fn root_index(&self) -> Option<usize> {
        self.packages.iter().position(Package::is_root)
    }

    /// Whether any package carries relationship metadata of an indirect dependency
    pub fn has_indirect(&self) -> bool {
        self.packages.iter().any(Package::is_indirect)
    }

    /// Maps each dependency id to the ids of the packages that depend on it
    pub fn parent_deps(&self) -> HashMap<String, Vec<String>> {
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        for pkg in &self.packages {
            for child in &pkg.depends_on {
                parents
                    .entry(child.clone())
                    .or_default()
                    .push(pkg.id().to_string());
            }
        }
        parents
    }

    /// Maps module names to package ids for the modules this application actually uses
    ///
    /// When a name appears more than once, the last package wins.
    pub fn ids_by_name(&self) -> HashMap<String, String> {
        self.packages
            .iter()
            .map(|pkg| (pkg.name().to_string(), pkg.id().to_string()))
            .collect()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}
