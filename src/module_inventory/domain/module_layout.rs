/// Where a dependency's source tree lives on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleLayout {
    /// `<manifest dir>/vendor/<module path>`, inside the scanned tree, unversioned
    Vendored,
    /// `$GOPATH/pkg/mod/<escaped module path>@<version>` on the host
    ModuleCache,
}

impl ModuleLayout {
    /// Vendored copies only keep license files; go.mod files are dropped by `go mod vendor`
    pub fn has_nested_manifests(&self) -> bool {
        matches!(self, ModuleLayout::ModuleCache)
    }
}
