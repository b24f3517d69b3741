use serde::{Deserialize, Serialize};

/// A single license detected inside a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseFinding {
    pub name: String,
    pub confidence: f64,
}

impl LicenseFinding {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Classification result for one candidate file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseFile {
    pub file_path: String,
    pub findings: Vec<LicenseFinding>,
}

impl LicenseFile {
    pub fn new(file_path: impl Into<String>, findings: Vec<LicenseFinding>) -> Self {
        Self {
            file_path: file_path.into(),
            findings,
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Distinct license names, in the order they were found
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.findings.len());
        for finding in &self.findings {
            if !names.contains(&finding.name) {
                names.push(finding.name.clone());
            }
        }
        names
    }
}
