//! gomod-inventory - Go module dependency graph and license inventory
//!
//! This library finds every `go.mod` in a project tree, builds one package
//! list per manifest, and enriches each package with the licenses and
//! direct dependencies found in the project's `vendor` directory or the Go
//! module cache. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`module_inventory`): Packages, applications, and the
//!   pure merge/prune/repair services
//! - **Application Layer** (`application`): The analysis use case and the
//!   services that reach the filesystem through ports
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem trees and console progress
//! - **Shared** (`shared`): Common utilities and error types
//!
//! The go.mod/go.sum grammar and license classification are ports only; the
//! host provides `ManifestParser` and `LicenseClassifier` implementations.
//!
//! # Example
//!
//! ```no_run
//! use gomod_inventory::prelude::*;
//! use std::path::Path;
//!
//! # struct HostParser;
//! # impl ManifestParser for HostParser {
//! #     fn parse_manifest(&self, _: &[u8], _: &ParseMode) -> Result<ParsedManifest> {
//! #         Ok(ParsedManifest::default())
//! #     }
//! #     fn parse_lockfile(&self, _: &[u8]) -> Result<Vec<Package>> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! # struct HostClassifier;
//! # impl LicenseClassifier for HostClassifier {
//! #     fn classify(&self, _: &Path, _: &[u8], _: f64) -> Result<Option<LicenseFile>> {
//! #         Ok(None)
//! #     }
//! # }
//! # fn main() -> Result<()> {
//! let project = Path::new(".");
//! let request = discover_config(project)?
//!     .map(|config| AnalysisRequest::from_config(&config))
//!     .unwrap_or_default();
//!
//! let use_case = AnalyzeModulesUseCase::new(
//!     ScanFileTree::new(project)?,
//!     HostFileTree::new(),
//!     HostParser,
//!     HostClassifier,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(&request)?;
//! for app in &response.applications {
//!     println!("{}: {} package(s)", app.file_path.display(), app.package_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod module_inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{HostFileTree, ScanFileTree};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, AnalysisStats};
    pub use crate::application::use_cases::AnalyzeModulesUseCase;
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::module_inventory::domain::{
        Application, LicenseFile, LicenseFinding, Package, Relationship,
    };
    pub use crate::module_inventory::services::{
        LegacyFormatMerger, ModuleNameCodec, OrphanAttacher,
    };
    pub use crate::ports::inbound::ModuleAnalysisPort;
    pub use crate::ports::outbound::{
        DetectionPriority, FileTree, LicenseClassifier, ManifestParser, ParseMode,
        ParsedManifest, ProgressReporter,
    };
    pub use crate::shared::Result;
}
