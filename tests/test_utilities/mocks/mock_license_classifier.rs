use gomod_inventory::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LicenseClassifier that recognizes a few license headlines
///
/// Records every classified path; content containing `CORRUPT` fails.
#[derive(Default, Clone)]
pub struct MockLicenseClassifier {
    pub classified: Arc<Mutex<Vec<PathBuf>>>,
}

const HEADLINES: &[(&str, &str)] = &[
    ("MIT License", "MIT"),
    ("Apache License", "Apache-2.0"),
    ("BSD 3-Clause", "BSD-3-Clause"),
    ("Mozilla Public License", "MPL-2.0"),
];

impl MockLicenseClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classified(&self) -> Vec<PathBuf> {
        self.classified.lock().unwrap().clone()
    }
}

impl LicenseClassifier for MockLicenseClassifier {
    fn classify(
        &self,
        path: &Path,
        content: &[u8],
        confidence_level: f64,
    ) -> Result<Option<LicenseFile>> {
        self.classified.lock().unwrap().push(path.to_path_buf());

        let text = String::from_utf8_lossy(content);
        if text.contains("CORRUPT") {
            anyhow::bail!("unreadable license text");
        }

        let findings: Vec<LicenseFinding> = HEADLINES
            .iter()
            .filter(|(headline, _)| text.contains(headline))
            .map(|(_, name)| LicenseFinding::new(*name, confidence_level))
            .collect();

        if findings.is_empty() {
            return Ok(None);
        }
        Ok(Some(LicenseFile::new(path.display().to_string(), findings)))
    }
}
