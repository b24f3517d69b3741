use crate::module_inventory::domain::{LicenseFile, ModuleLayout};
use crate::module_inventory::policies::LicenseFileNamePolicy;
use crate::ports::outbound::{FileTree, LicenseClassifier};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::path::Path;

/// LicenseFinder - Detects the license of one module directory
///
/// Candidate files are classified in lexical path order and the last one
/// with at least one finding wins; there is no ranking between files.
pub struct LicenseFinder<'a, C: LicenseClassifier> {
    classifier: &'a C,
    confidence_level: f64,
}

impl<'a, C: LicenseClassifier> LicenseFinder<'a, C> {
    pub fn new(classifier: &'a C, confidence_level: f64) -> Self {
        Self {
            classifier,
            confidence_level,
        }
    }

    /// Returns the distinct license names found under `dir`
    ///
    /// In the vendored layout every regular file is a candidate, since
    /// vendoring keeps nothing but sources and license files. In the module
    /// cache only license-like file names are considered.
    ///
    /// A missing `dir` yields an empty list: the module may simply not be
    /// downloaded or vendored.
    ///
    /// # Errors
    /// Returns an error if a candidate cannot be read or classified
    pub fn find(
        &self,
        tree: &dyn FileTree,
        dir: &Path,
        layout: ModuleLayout,
    ) -> Result<Vec<String>> {
        let include = |path: &Path| match layout {
            ModuleLayout::Vendored => true,
            ModuleLayout::ModuleCache => path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(LicenseFileNamePolicy::is_license_file),
        };

        let Some(candidates) = tree.walk_files(dir, &include)? else {
            return Ok(Vec::new());
        };

        let mut license: Option<LicenseFile> = None;
        for path in candidates {
            let Some(content) = tree.read_file(&path)? else {
                continue;
            };

            let classified = self
                .classifier
                .classify(&path, &content, self.confidence_level)
                .map_err(|e| AnalysisError::LicenseClassificationError {
                    path: path.clone(),
                    details: e.to_string(),
                })?;

            if let Some(found) = classified.filter(LicenseFile::has_findings) {
                license = Some(found);
            }
        }

        Ok(license.map(|l| l.names()).unwrap_or_default())
    }
}
