use crate::module_inventory::domain::LicenseFile;
use crate::shared::Result;
use std::path::Path;

/// LicenseClassifier port for license text classification
///
/// Implementations identify licenses in a file's content and keep only the
/// findings whose confidence reaches the threshold.
pub trait LicenseClassifier {
    /// Classifies one file
    ///
    /// # Arguments
    /// * `path` - Path of the file (used for reporting only)
    /// * `content` - Raw file content
    /// * `confidence_level` - Minimum confidence (0.0..=1.0) for a finding to count
    ///
    /// # Returns
    /// `None` when the content is not recognized as a license at all
    ///
    /// # Errors
    /// Returns an error if classification itself fails
    fn classify(
        &self,
        path: &Path,
        content: &[u8],
        confidence_level: f64,
    ) -> Result<Option<LicenseFile>>;
}
