use crate::module_inventory::domain::Package;
use crate::shared::Result;
use serde::Deserialize;

/// How thoroughly the root manifest should be analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionPriority {
    /// Report what the manifest states
    #[default]
    Precise,
    /// Also report what may be present (e.g. the minimum toolchain's stdlib)
    Comprehensive,
}

/// Parser configuration for one go.mod read
///
/// The application's own go.mod is read in root mode; go.mod files of
/// cached dependencies are read in leaf mode, since their replace
/// directives are ignored by the Go toolchain and they carry no stdlib
/// of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMode {
    pub apply_replace: bool,
    pub detect_stdlib: bool,
    pub use_min_toolchain_version: bool,
}

impl ParseMode {
    pub fn root(priority: DetectionPriority) -> Self {
        Self {
            apply_replace: true,
            detect_stdlib: true,
            use_min_toolchain_version: priority == DetectionPriority::Comprehensive,
        }
    }

    pub fn leaf() -> Self {
        Self {
            apply_replace: false,
            detect_stdlib: false,
            use_min_toolchain_version: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.apply_replace
    }
}

/// Result of parsing a go.mod
#[derive(Debug, Clone, Default)]
pub struct ParsedManifest {
    /// Packages in declaration order; the main module is tagged `Root`
    pub packages: Vec<Package>,
    /// The `module` directive, when present
    pub module_path: Option<String>,
}

impl ParsedManifest {
    pub fn new(packages: Vec<Package>, module_path: Option<String>) -> Self {
        Self {
            packages,
            module_path,
        }
    }
}

/// ManifestParser port for the go.mod / go.sum grammars
///
/// Callers handle file access; a parser only ever sees bytes of a file that
/// exists, so any error it returns is a structural one.
pub trait ManifestParser {
    /// Parses a go.mod
    ///
    /// # Errors
    /// Returns an error if the content is not a valid go.mod
    fn parse_manifest(&self, content: &[u8], mode: &ParseMode) -> Result<ParsedManifest>;

    /// Parses a go.sum into one package per module entry
    ///
    /// Entries carry `Relationship::Unknown`; go.sum has no such metadata.
    ///
    /// # Errors
    /// Returns an error if the content is not a valid go.sum
    fn parse_lockfile(&self, content: &[u8]) -> Result<Vec<Package>>;
}
