mod dependency_graph_resolver;
mod license_cache;
mod license_finder;
mod manifest_collector;
mod module_cache;

#[cfg(test)]
pub(crate) mod test_support;

pub use dependency_graph_resolver::{DependencyGraphResolver, EnrichmentOutcome};
pub use license_cache::LicenseCache;
pub use license_finder::LicenseFinder;
pub use manifest_collector::ManifestCollector;
pub use module_cache::ModuleCacheLocation;
