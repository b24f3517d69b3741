use std::collections::HashMap;

/// EdgeFilter - Turns declared dependency names into graph edges
///
/// A cached module's go.mod may require modules (or versions) that the
/// application never selected. Only names present in the application's own
/// package set become edges; the rest are dropped.
pub struct EdgeFilter;

impl EdgeFilter {
    /// Resolves names to package ids using the application's used-package map
    ///
    /// # Arguments
    /// * `declared` - Module names a dependency declares as direct requirements
    /// * `used` - Module name to package id, for the application being enriched
    pub fn resolve(declared: &[String], used: &HashMap<String, String>) -> Vec<String> {
        declared
            .iter()
            .filter_map(|name| used.get(name).cloned())
            .collect()
    }
}
