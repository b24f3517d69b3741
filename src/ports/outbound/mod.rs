/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the filesystem, the manifest grammars, the license
/// classifier and the console.
pub mod file_tree;
pub mod license_classifier;
pub mod manifest_parser;
pub mod progress_reporter;

pub use file_tree::FileTree;
pub use license_classifier::LicenseClassifier;
pub use manifest_parser::{DetectionPriority, ManifestParser, ParseMode, ParsedManifest};
pub use progress_reporter::ProgressReporter;
