use crate::application::dto::{AnalysisRequest, AnalysisResponse, AnalysisStats};
use crate::application::services::{
    DependencyGraphResolver, EnrichmentOutcome, LicenseCache, LicenseFinder, ManifestCollector,
    ModuleCacheLocation,
};
use crate::module_inventory::domain::Application;
use crate::module_inventory::policies::RequiredFilePolicy;
use crate::module_inventory::services::{FilePatternMatcher, OrphanAttacher};
use crate::ports::inbound::ModuleAnalysisPort;
use crate::ports::outbound::{
    FileTree, LicenseClassifier, ManifestParser, ParseMode, ProgressReporter,
};
use crate::shared::Result;
use std::path::Path;

/// Bumped whenever the analysis output changes for the same input
pub const ANALYZER_VERSION: u32 = 2;

/// AnalyzeModulesUseCase - Core use case for Go module inventory
///
/// Runs one sequential pass: collect manifests, enrich packages with
/// licenses and edges, then reattach orphans. Collection errors abort the
/// analysis; enrichment errors only degrade it.
///
/// # Type Parameters
/// * `S` - FileTree over the scanned project
/// * `H` - FileTree over the host, where the module cache lives
/// * `P` - ManifestParser implementation
/// * `C` - LicenseClassifier implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeModulesUseCase<S, H, P, C, PR> {
    scan_tree: S,
    host_tree: H,
    parser: P,
    classifier: C,
    progress_reporter: PR,
}

impl<S, H, P, C, PR> AnalyzeModulesUseCase<S, H, P, C, PR>
where
    S: FileTree,
    H: FileTree,
    P: ManifestParser,
    C: LicenseClassifier,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeModulesUseCase with injected dependencies
    pub fn new(scan_tree: S, host_tree: H, parser: P, classifier: C, progress_reporter: PR) -> Self {
        Self {
            scan_tree,
            host_tree,
            parser,
            classifier,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - Patterns, classifier confidence and module cache override
    ///
    /// # Returns
    /// The applications in scan order together with run statistics
    pub fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        request.validate()?;

        // Step 1: Find and parse every manifest
        let mut apps = self.collect_applications(request)?;

        // Step 2: Licenses and dependency edges
        let cache = LicenseCache::new();
        let mut stats = self.enrich_applications(&mut apps, request, &cache);

        // Step 3: Hang orphaned indirect packages under the root
        stats.orphans_attached = apps.iter_mut().map(OrphanAttacher::attach_to_root).sum();

        stats.applications = apps.len();
        stats.packages = apps.iter().map(Application::package_count).sum();
        stats.license_cache_hits = cache.hits();
        stats.license_cache_misses = cache.misses();

        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} package(s) across {} application(s)",
            stats.packages, stats.applications
        ));

        Ok(AnalysisResponse::new(apps, stats))
    }

    fn collect_applications(&self, request: &AnalysisRequest) -> Result<Vec<Application>> {
        self.progress_reporter.report("📖 Searching for go.mod files...");

        let patterns = FilePatternMatcher::new(request.file_patterns.clone())?;
        let collector = ManifestCollector::new(
            &self.scan_tree,
            &self.parser,
            &patterns,
            ParseMode::root(request.detection_priority),
        );
        let apps = collector.collect()?;

        self.progress_reporter
            .report(&format!("✅ Detected {} application(s)", apps.len()));

        Ok(apps)
    }

    /// Enriches applications in order until the first failure
    ///
    /// A failure leaves the remaining applications as collected; it is
    /// logged and reported, never returned.
    fn enrich_applications(
        &self,
        apps: &mut [Application],
        request: &AnalysisRequest,
        cache: &LicenseCache,
    ) -> AnalysisStats {
        let mut stats = AnalysisStats::default();
        if apps.is_empty() {
            return stats;
        }

        let location = ModuleCacheLocation::resolve(request.gopath.as_deref());
        tracing::debug!(mod_dir = %location.mod_dir().display(), "Module cache location");

        let resolver = DependencyGraphResolver::new(
            &self.scan_tree,
            &self.host_tree,
            &self.parser,
            LicenseFinder::new(&self.classifier, request.license_confidence_level),
            cache,
            location.mod_dir(),
        );

        self.progress_reporter
            .report("🔍 Collecting licenses and dependency graph...");

        let total = apps.len();
        for (idx, app) in apps.iter_mut().enumerate() {
            let file_path = app.file_path.display().to_string();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&file_path));

            match resolver.resolve_application(app) {
                Ok(EnrichmentOutcome::Enriched(_)) => {}
                Ok(EnrichmentOutcome::NoSources) => stats.applications_without_sources += 1,
                Err(e) => {
                    tracing::warn!(app = %file_path, error = %format!("{:#}", e), "Enrichment aborted");
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Unable to collect additional info: {:#}",
                        e
                    ));
                    stats.enrichment_failed = true;
                    break;
                }
            }
        }

        stats
    }
}

impl<S, H, P, C, PR> ModuleAnalysisPort for AnalyzeModulesUseCase<S, H, P, C, PR>
where
    S: FileTree,
    H: FileTree,
    P: ManifestParser,
    C: LicenseClassifier,
    PR: ProgressReporter,
{
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute(request)
    }

    fn required(&self, path: &Path) -> bool {
        RequiredFilePolicy::is_required(path)
    }

    fn analyzer_version(&self) -> u32 {
        ANALYZER_VERSION
    }
}
