/// File name prefixes that mark a license candidate in the module cache
///
/// Matching is case-insensitive and any suffix is accepted
/// (`LICENSE.md`, `Copying.txt`, `README-legal`, ...).
const LICENSE_FILE_PREFIXES: &[&str] = &[
    "license",
    "licence",
    "unlicense",
    "unlicence",
    "copying",
    "readme",
    "notice",
];

/// LicenseFileNamePolicy - Decides which files in a cached module are worth classifying
///
/// Vendored trees are pre-filtered by `go mod vendor`, so this policy only
/// applies to the global module cache layout.
pub struct LicenseFileNamePolicy;

impl LicenseFileNamePolicy {
    pub fn is_license_file(file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        LICENSE_FILE_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_names_match() {
        for name in [
            "LICENSE",
            "LICENSE.md",
            "license.txt",
            "LICENCE",
            "UNLICENSE",
            "COPYING",
            "Copying.LESSER",
            "README.md",
            "NOTICE",
        ] {
            assert!(LicenseFileNamePolicy::is_license_file(name), "{}", name);
        }
    }

    #[test]
    fn test_other_names_do_not_match() {
        for name in ["main.go", "go.mod", "MY_LICENSE", "doc.go", "CHANGELOG.md"] {
            assert!(!LicenseFileNamePolicy::is_license_file(name), "{}", name);
        }
    }
}
