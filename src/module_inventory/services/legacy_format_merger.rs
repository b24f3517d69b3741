use crate::module_inventory::domain::{Package, Relationship};
use std::collections::HashSet;

/// LegacyFormatMerger - Reconciles go.mod files that predate `// indirect` markers
///
/// Before Go 1.17, go.mod listed only direct requirements. The companion
/// go.sum then carries the rest of the module graph, and everything it
/// contributes that go.mod does not name must be an indirect dependency.
pub struct LegacyFormatMerger;

impl LegacyFormatMerger {
    /// A manifest without a single indirect package predates relationship metadata
    pub fn needs_lockfile(packages: &[Package]) -> bool {
        !packages.iter().any(Package::is_indirect)
    }

    /// Merges lockfile entries into the manifest's package list
    ///
    /// The manifest wins on name collisions and the first manifest entry per
    /// name is kept. Entries only present in the lockfile are appended in
    /// lockfile order and forced to `Relationship::Indirect`.
    pub fn merge(manifest: Vec<Package>, lockfile: Vec<Package>) -> Vec<Package> {
        let mut seen: HashSet<String> = HashSet::with_capacity(manifest.len() + lockfile.len());
        let mut merged = Vec::with_capacity(manifest.len() + lockfile.len());

        for pkg in manifest {
            if seen.insert(pkg.name().to_string()) {
                merged.push(pkg);
            }
        }

        for pkg in lockfile {
            // Skip dependencies in go.mod so that go.mod is preferred
            if seen.insert(pkg.name().to_string()) {
                merged.push(pkg.with_relationship(Relationship::Indirect));
            }
        }

        merged
    }
}
