use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// LicenseCache - License names per package id, for one analysis invocation
///
/// Identical ids denote identical module contents, so two applications that
/// share a dependency share its license result. The map is concurrency-safe
/// so enrichment can be parallelized without changing this type.
#[derive(Debug, Default)]
pub struct LicenseCache {
    entries: DashMap<String, Vec<String>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl LicenseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a package id, counting the hit or miss
    pub fn get(&self, package_id: &str) -> Option<Vec<String>> {
        match self.entries.get(package_id) {
            Some(cached) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(cached.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores the license names of a package; an empty list is cached too
    pub fn insert(&self, package_id: &str, licenses: Vec<String>) {
        self.entries.insert(package_id.to_string(), licenses);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
