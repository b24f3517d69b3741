/// Mock implementations for testing
mod mock_license_classifier;
mod mock_manifest_parser;
mod mock_progress_reporter;

pub use mock_license_classifier::MockLicenseClassifier;
pub use mock_manifest_parser::MockManifestParser;
pub use mock_progress_reporter::MockProgressReporter;
