use super::LicenseFileNamePolicy;
use std::path::Path;

pub const GO_MOD: &str = "go.mod";
pub const GO_SUM: &str = "go.sum";
pub const VENDOR_DIR: &str = "vendor";

/// RequiredFilePolicy - Files the analyzer needs the host to retain from a scan
///
/// go.mod and go.sum are always needed. The `vendor` tree carries no
/// manifests, only license files, so those are kept when they live under a
/// `vendor` component.
pub struct RequiredFilePolicy;

impl RequiredFilePolicy {
    pub fn is_required(path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if file_name == GO_MOD || file_name == GO_SUM {
            return true;
        }

        LicenseFileNamePolicy::is_license_file(file_name)
            && path.components().any(|c| c.as_os_str() == VENDOR_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifests_are_required() {
        assert!(RequiredFilePolicy::is_required(Path::new("go.mod")));
        assert!(RequiredFilePolicy::is_required(Path::new("app/go.sum")));
    }

    #[test]
    fn test_vendor_license_is_required() {
        assert!(RequiredFilePolicy::is_required(Path::new(
            "app/vendor/github.com/pkg/errors/LICENSE"
        )));
    }

    #[test]
    fn test_license_outside_vendor_is_not_required() {
        assert!(!RequiredFilePolicy::is_required(Path::new("app/LICENSE")));
        assert!(!RequiredFilePolicy::is_required(Path::new(
            "app/vendored/github.com/pkg/errors/LICENSE"
        )));
    }

    #[test]
    fn test_sources_are_not_required() {
        assert!(!RequiredFilePolicy::is_required(Path::new(
            "app/vendor/github.com/pkg/errors/errors.go"
        )));
        assert!(!RequiredFilePolicy::is_required(Path::new("main.go")));
    }
}
