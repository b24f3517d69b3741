use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;
use std::path::Path;

/// ModuleAnalysisPort - Inbound port for the Go module analysis use case
///
/// This is what a host scanner drives: it asks which files to keep from a
/// scan, then runs one analysis over the retained tree.
pub trait ModuleAnalysisPort {
    /// Collects every go.mod under the scan tree and enriches it with
    /// licenses and dependency edges
    ///
    /// # Errors
    /// Returns an error if a manifest or lockfile is malformed or the
    /// request is invalid. Enrichment problems are reported, not returned.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;

    /// Whether a file of the scanned tree is needed by `analyze`
    fn required(&self, path: &Path) -> bool;

    /// Version of the analysis; bump when results change for the same input
    fn analyzer_version(&self) -> u32;
}
