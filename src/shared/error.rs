use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for module analysis.
///
/// Not-found conditions never surface as errors; these variants cover the
/// structural failures that abort collection or enrichment.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid scan root: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable project directory")]
    InvalidScanRoot { path: PathBuf, reason: String },

    #[error("Failed to parse {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid go.mod or go.sum")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Unable to classify license file: {path}\nDetails: {details}")]
    LicenseClassificationError { path: PathBuf, details: String },

    #[error("Dependency graph error for module {module}\nDetails: {details}")]
    DependencyGraphError { module: String, details: String },

    /// Validation error for configuration and domain values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
