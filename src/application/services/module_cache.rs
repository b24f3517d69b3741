use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// ModuleCacheLocation - Where `go mod download` puts modules on this host
///
/// Resolution order: explicit override, then the first entry of `GOPATH`,
/// then `$HOME/go` (the Go toolchain's default). The module cache itself is
/// `<gopath>/pkg/mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCacheLocation {
    gopath: PathBuf,
}

impl ModuleCacheLocation {
    /// Resolves the location from the environment, read once per call
    pub fn resolve(gopath_override: Option<&Path>) -> Self {
        Self::from_sources(
            gopath_override,
            std::env::var_os("GOPATH"),
            home_dir_var(),
        )
    }

    fn from_sources(
        gopath_override: Option<&Path>,
        gopath_env: Option<OsString>,
        home: Option<OsString>,
    ) -> Self {
        let gopath = gopath_override
            .map(Path::to_path_buf)
            .or_else(|| {
                gopath_env
                    .filter(|v| !v.is_empty())
                    .and_then(|v| std::env::split_paths(&v).find(|p| !p.as_os_str().is_empty()))
            })
            .or_else(|| home.filter(|h| !h.is_empty()).map(|h| PathBuf::from(h).join("go")))
            .unwrap_or_else(|| PathBuf::from("go"));

        Self { gopath }
    }

    pub fn gopath(&self) -> &Path {
        &self.gopath
    }

    /// `$GOPATH/pkg/mod`
    pub fn mod_dir(&self) -> PathBuf {
        self.gopath.join("pkg").join("mod")
    }
}

fn home_dir_var() -> Option<OsString> {
    std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))
}
