use crate::module_inventory::domain::Application;
use serde::Serialize;

/// Counters describing how an analysis went
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub applications: usize,
    pub packages: usize,
    /// Applications that had neither a vendor directory nor a module cache
    pub applications_without_sources: usize,
    pub license_cache_hits: usize,
    pub license_cache_misses: usize,
    /// Orphan indirect packages hung under a root package
    pub orphans_attached: usize,
    /// Enrichment aborted; licenses and edges may be partial
    pub enrichment_failed: bool,
}

/// AnalysisResponse - Result of one analysis invocation
///
/// `applications` is in scan order, one per manifest found.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub applications: Vec<Application>,
    pub stats: AnalysisStats,
}

impl AnalysisResponse {
    pub fn new(applications: Vec<Application>, stats: AnalysisStats) -> Self {
        Self {
            applications,
            stats,
        }
    }
}
