use crate::module_inventory::domain::Application;
use crate::module_inventory::policies::{GO_MOD, GO_SUM};
use crate::module_inventory::services::{FilePatternMatcher, LegacyFormatMerger};
use crate::ports::outbound::{FileTree, ManifestParser, ParseMode};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// ManifestCollector - Finds every go.mod in the scanned tree
///
/// Produces one `Application` per manifest, in walk order. Manifests
/// written before Go 1.17 are completed from the go.sum next to them.
pub struct ManifestCollector<'a, P: ManifestParser> {
    tree: &'a dyn FileTree,
    parser: &'a P,
    patterns: &'a FilePatternMatcher,
    mode: ParseMode,
}

impl<'a, P: ManifestParser> ManifestCollector<'a, P> {
    pub fn new(
        tree: &'a dyn FileTree,
        parser: &'a P,
        patterns: &'a FilePatternMatcher,
        mode: ParseMode,
    ) -> Self {
        Self {
            tree,
            parser,
            patterns,
            mode,
        }
    }

    /// Walks the whole tree and parses every manifest it finds
    ///
    /// # Errors
    /// Any read or parse failure aborts the walk; the error names the
    /// offending file
    pub fn collect(&self) -> Result<Vec<Application>> {
        let patterns = self.patterns;
        let required = |path: &Path| {
            path.file_name().is_some_and(|name| name == GO_MOD) || patterns.matches(path)
        };

        let manifests = self
            .tree
            .walk_files(Path::new(""), &required)
            .context("walk error")?
            .unwrap_or_default();

        let mut apps = Vec::with_capacity(manifests.len());
        for path in manifests {
            if let Some(app) = self.parse_application(&path)? {
                apps.push(app);
            }
        }

        Ok(apps)
    }

    /// Parses one manifest, merging its go.sum when it predates `// indirect`
    ///
    /// # Returns
    /// `None` if the manifest disappeared between the walk and the read, or
    /// declares no packages at all
    pub fn parse_application(&self, path: &Path) -> Result<Option<Application>> {
        let Some(content) = self
            .tree
            .read_file(path)
            .with_context(|| format!("file open error: {}", path.display()))?
        else {
            return Ok(None);
        };

        let parsed = self
            .parser
            .parse_manifest(&content, &self.mode)
            .map_err(|e| AnalysisError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if parsed.packages.is_empty() {
            tracing::debug!(path = %path.display(), "No packages in manifest, skipping");
            return Ok(None);
        }

        let mut packages = parsed.packages;

        if LegacyFormatMerger::needs_lockfile(&packages) {
            // e.g. app/go.mod => app/go.sum
            let sum_path = path.parent().unwrap_or(Path::new("")).join(GO_SUM);
            let lockfile = self
                .tree
                .read_file(&sum_path)
                .with_context(|| format!("file open error: {}", sum_path.display()))?;

            if let Some(sum_content) = lockfile {
                let sum_packages = self.parser.parse_lockfile(&sum_content).map_err(|e| {
                    AnalysisError::ManifestParseError {
                        path: sum_path.clone(),
                        details: e.to_string(),
                    }
                })?;
                tracing::debug!(
                    path = %sum_path.display(),
                    entries = sum_packages.len(),
                    "Merging go.sum into a go.mod without indirect requirements"
                );
                packages = LegacyFormatMerger::merge(packages, sum_packages);
            }
        }

        Ok(Some(Application::new(path.to_path_buf(), packages)))
    }
}
