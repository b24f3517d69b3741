mod disk;
mod host_tree;
mod scan_tree;

pub use host_tree::HostFileTree;
pub use scan_tree::ScanFileTree;
