use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for module paths (security limit)
const MAX_MODULE_NAME_LENGTH: usize = 512;

/// Maximum length for module versions (security limit)
const MAX_VERSION_LENGTH: usize = 128;

/// NewType wrapper for a module path with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Module name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_MODULE_NAME_LENGTH {
            anyhow::bail!(
                "Module name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_MODULE_NAME_LENGTH
            );
        }

        // Module paths end up as cache directory names; whitespace and control
        // characters never appear in a valid one.
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Module name contains invalid characters. Whitespace and control characters are not allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a module version
///
/// The main module carries no version, so an empty value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Module version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Module version contains invalid characters. Whitespace and control characters are not allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a package is related to the application that declares it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Root,
    Direct,
    Indirect,
    /// Reported by formats without relationship metadata (go.sum)
    #[default]
    Unknown,
}

/// Package entity: one node of an application's dependency graph
///
/// Licenses and `depends_on` start empty and are filled in place during
/// enrichment. `depends_on` holds identifiers of other packages of the
/// same application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: String,
    name: ModuleName,
    version: Version,
    relationship: Relationship,
    indirect: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self> {
        let name = ModuleName::new(name)?;
        let version = Version::new(version)?;
        Ok(Self {
            id: package_id(&name, &version),
            name,
            version,
            relationship: Relationship::Unknown,
            indirect: false,
            licenses: Vec::new(),
            depends_on: Vec::new(),
        })
    }

    /// Sets the relationship, keeping the `indirect` flag consistent with it
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.set_relationship(relationship);
        self
    }

    pub fn set_relationship(&mut self, relationship: Relationship) {
        self.relationship = relationship;
        self.indirect = relationship == Relationship::Indirect;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn is_indirect(&self) -> bool {
        self.indirect
    }

    pub fn is_root(&self) -> bool {
        self.relationship == Relationship::Root
    }
}

/// Builds the `name@version` identifier; the main module has no version suffix
fn package_id(name: &ModuleName, version: &Version) -> String {
    if version.is_empty() {
        name.to_string()
    } else {
        format!("{}@{}", name, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_new_valid() {
        let name = ModuleName::new("github.com/BurntSushi/toml".to_string()).unwrap();
        assert_eq!(name.as_str(), "github.com/BurntSushi/toml");
    }

    #[test]
    fn test_module_name_new_empty() {
        assert!(ModuleName::new("".to_string()).is_err());
    }

    #[test]
    fn test_module_name_rejects_whitespace() {
        let result = ModuleName::new("github.com/foo bar".to_string());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid characters"));
    }

    #[test]
    fn test_module_name_too_long() {
        let result = ModuleName::new("a".repeat(MAX_MODULE_NAME_LENGTH + 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_version_may_be_empty() {
        let version = Version::new(String::new()).unwrap();
        assert!(version.is_empty());
    }

    #[test]
    fn test_package_id_with_version() {
        let package = Package::new("golang.org/x/text".to_string(), "v0.14.0".to_string()).unwrap();
        assert_eq!(package.id(), "golang.org/x/text@v0.14.0");
        assert_eq!(package.name(), "golang.org/x/text");
        assert_eq!(package.version(), "v0.14.0");
        assert_eq!(package.relationship(), Relationship::Unknown);
        assert!(!package.is_indirect());
    }

    #[test]
    fn test_package_id_without_version() {
        let package = Package::new("example.com/app".to_string(), String::new())
            .unwrap()
            .with_relationship(Relationship::Root);
        assert_eq!(package.id(), "example.com/app");
        assert!(package.is_root());
    }

    #[test]
    fn test_set_relationship_updates_indirect_flag() {
        let mut package = Package::new("github.com/pkg/errors".to_string(), "v0.9.1".to_string())
            .unwrap()
            .with_relationship(Relationship::Indirect);
        assert!(package.is_indirect());

        package.set_relationship(Relationship::Direct);
        assert!(!package.is_indirect());
    }

    #[test]
    fn test_relationship_serializes_lowercase() {
        let json = serde_json::to_string(&Relationship::Indirect).unwrap();
        assert_eq!(json, "\"indirect\"");
    }
}
