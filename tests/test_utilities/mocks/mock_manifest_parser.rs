use gomod_inventory::prelude::*;

/// Mock ManifestParser understanding a subset of go.mod and go.sum
///
/// go.mod: `module`, single-line and block `require` with an optional
/// `// indirect` marker; other directives are ignored. go.sum: one
/// `<module> <version>[/go.mod] <hash>` entry per line.
#[derive(Default, Clone)]
pub struct MockManifestParser;

impl MockManifestParser {
    pub fn new() -> Self {
        Self
    }

    fn requirement(line: &str) -> Result<Package> {
        let (requirement, indirect) = match line.split_once("//") {
            Some((requirement, comment)) => (requirement, comment.trim() == "indirect"),
            None => (line, false),
        };
        let fields: Vec<&str> = requirement.split_whitespace().collect();
        let [name, version] = fields.as_slice() else {
            anyhow::bail!("malformed require: {}", line);
        };
        let relationship = if indirect {
            Relationship::Indirect
        } else {
            Relationship::Direct
        };
        Ok(Package::new(name.to_string(), version.to_string())?.with_relationship(relationship))
    }
}

impl ManifestParser for MockManifestParser {
    fn parse_manifest(&self, content: &[u8], _mode: &ParseMode) -> Result<ParsedManifest> {
        let text = std::str::from_utf8(content)?;
        let mut packages = Vec::new();
        let mut module_path = None;
        let mut in_require = false;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if in_require {
                if line == ")" {
                    in_require = false;
                } else {
                    packages.push(Self::requirement(line)?);
                }
            } else if let Some(name) = line.strip_prefix("module ") {
                let name = name.trim().to_string();
                module_path = Some(name.clone());
                packages.insert(
                    0,
                    Package::new(name, String::new())?.with_relationship(Relationship::Root),
                );
            } else if line == "require (" {
                in_require = true;
            } else if let Some(req) = line.strip_prefix("require ") {
                packages.push(Self::requirement(req)?);
            }
        }

        if in_require {
            anyhow::bail!("unterminated require block");
        }
        Ok(ParsedManifest::new(packages, module_path))
    }

    fn parse_lockfile(&self, content: &[u8]) -> Result<Vec<Package>> {
        let text = std::str::from_utf8(content)?;
        let mut packages: Vec<Package> = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [name, version, _hash] = fields.as_slice() else {
                anyhow::bail!("malformed go.sum line: {}", line);
            };
            let version = version.trim_end_matches("/go.mod");
            if packages
                .iter()
                .any(|p| p.name() == *name && p.version() == version)
            {
                continue;
            }
            packages.push(Package::new(name.to_string(), version.to_string())?);
        }

        Ok(packages)
    }
}
