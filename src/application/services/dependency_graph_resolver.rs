use super::{LicenseCache, LicenseFinder};
use crate::module_inventory::domain::{Application, Dependency, ModuleLayout, Relationship};
use crate::module_inventory::policies::{GO_MOD, VENDOR_DIR};
use crate::module_inventory::services::{EdgeFilter, ModuleNameCodec};
use crate::ports::outbound::{FileTree, LicenseClassifier, ManifestParser, ParseMode};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// What happened to one application during enrichment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// Licenses (and, for the module cache, edges) were collected
    Enriched(ModuleLayout),
    /// Neither a vendor directory nor the module cache is available
    NoSources,
}

/// DependencyGraphResolver - Fills licenses and `depends_on` for every package
///
/// Module sources are looked up in the application's `vendor` directory when
/// it exists and is non-empty, otherwise in the Go module cache. Only the
/// module cache keeps each dependency's own go.mod, so edges are only
/// discovered there.
pub struct DependencyGraphResolver<'a, P: ManifestParser, C: LicenseClassifier> {
    scan_tree: &'a dyn FileTree,
    host_tree: &'a dyn FileTree,
    parser: &'a P,
    license_finder: LicenseFinder<'a, C>,
    cache: &'a LicenseCache,
    mod_dir: PathBuf,
    mod_dir_found: bool,
}

impl<'a, P: ManifestParser, C: LicenseClassifier> DependencyGraphResolver<'a, P, C> {
    /// Creates a resolver for one analysis
    ///
    /// # Arguments
    /// * `scan_tree` - The scanned project; manifests and `vendor` live here
    /// * `host_tree` - The host filesystem holding the module cache
    /// * `mod_dir` - `$GOPATH/pkg/mod`; checked for existence once, here
    pub fn new(
        scan_tree: &'a dyn FileTree,
        host_tree: &'a dyn FileTree,
        parser: &'a P,
        license_finder: LicenseFinder<'a, C>,
        cache: &'a LicenseCache,
        mod_dir: PathBuf,
    ) -> Self {
        let mod_dir_found = host_tree.dir_exists(&mod_dir);
        Self {
            scan_tree,
            host_tree,
            parser,
            license_finder,
            cache,
            mod_dir,
            mod_dir_found,
        }
    }

    /// Enriches the packages of one application
    ///
    /// Packages whose id is already in the license cache are filled from it
    /// and skipped otherwise; their edges were discovered by the earlier
    /// lookup.
    ///
    /// # Errors
    /// Returns an error if license classification fails or a cached
    /// module's go.mod is malformed
    pub fn resolve_application(&self, app: &mut Application) -> Result<EnrichmentOutcome> {
        // Actually used dependencies
        let used = app.ids_by_name();

        // vendor directory is in the same directory as go.mod
        let vendor_dir = app
            .file_path
            .parent()
            .unwrap_or(Path::new(""))
            .join(VENDOR_DIR);

        let (layout, base_dir, tree) = if self.vendor_dir_found(&vendor_dir) {
            tracing::debug!(path = %vendor_dir.display(), "Vendor directory found");
            (ModuleLayout::Vendored, vendor_dir, self.scan_tree)
        } else if self.mod_dir_found {
            (ModuleLayout::ModuleCache, self.mod_dir.clone(), self.host_tree)
        } else {
            tracing::debug!(
                gopath_mod = %self.mod_dir.display(),
                app = %app.file_path.display(),
                "GOPATH and vendor directory not found. Need 'go mod download' or 'go mod vendor' for license scanning"
            );
            return Ok(EnrichmentOutcome::NoSources);
        };

        for pkg in app.packages.iter_mut() {
            if let Some(licenses) = self.cache.get(pkg.id()) {
                pkg.licenses = licenses;
                continue;
            }

            let module_dir =
                base_dir.join(ModuleNameCodec::module_dir_name(pkg.name(), pkg.version(), layout));

            let licenses = self
                .license_finder
                .find(tree, &module_dir, layout)
                .context("unable to collect license")?;
            self.cache.insert(pkg.id(), licenses.clone());
            pkg.licenses = licenses;

            if !layout.has_nested_manifests() {
                continue;
            }

            let dep = self
                .collect_deps(&module_dir, pkg.id())
                .context("dependency graph error")?;
            if dep.id.is_empty() {
                // go.mod not found
                continue;
            }

            // Filter out unused dependencies and convert module names to ids
            pkg.depends_on = EdgeFilter::resolve(&dep.depends_on, &used);
        }

        Ok(EnrichmentOutcome::Enriched(layout))
    }

    fn vendor_dir_found(&self, vendor_dir: &Path) -> bool {
        match self.scan_tree.read_dir(vendor_dir) {
            Ok(Some(entries)) => !entries.is_empty(),
            Ok(None) => false,
            Err(e) => {
                tracing::debug!(path = %vendor_dir.display(), error = %e, "Unable to read vendor directory");
                false
            }
        }
    }

    /// Reads the direct requirements a cached module declares in its own go.mod
    ///
    /// # Returns
    /// An empty `Dependency` (no id) if the module has no go.mod
    fn collect_deps(&self, module_dir: &Path, pkg_id: &str) -> Result<Dependency> {
        // e.g. $GOPATH/pkg/mod/github.com/aquasecurity/go-dep-parser@v0.0.0-20220406074731-71021a481237/go.mod
        let manifest_path = module_dir.join(GO_MOD);
        let content = self
            .host_tree
            .read_file(&manifest_path)
            .with_context(|| format!("file open error: {}", manifest_path.display()))?;

        let Some(content) = content else {
            tracing::debug!(
                module = pkg_id,
                "Unable to identify dependencies as it doesn't support Go modules"
            );
            return Ok(Dependency::default());
        };

        let parsed = self
            .parser
            .parse_manifest(&content, &ParseMode::leaf())
            .map_err(|e| AnalysisError::DependencyGraphError {
                module: pkg_id.to_string(),
                details: format!("{} parse error: {}", manifest_path.display(), e),
            })?;

        let depends_on = parsed
            .packages
            .into_iter()
            .filter(|p| p.relationship() == Relationship::Direct)
            .map(|p| p.name().to_string())
            .collect();

        Ok(Dependency::new(pkg_id.to_string(), depends_on))
    }
}
