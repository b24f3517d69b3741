use crate::config::{ConfigFile, DEFAULT_LICENSE_CONFIDENCE_LEVEL};
use crate::ports::outbound::DetectionPriority;
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::path::PathBuf;

/// AnalysisRequest - Options for one analysis invocation
///
/// The scanned tree itself is injected into the use case; this DTO only
/// carries how to analyze it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Extra manifest inclusion patterns, besides files named `go.mod`
    pub file_patterns: Vec<String>,
    /// Minimum confidence for a license finding
    pub license_confidence_level: f64,
    pub detection_priority: DetectionPriority,
    /// Overrides `GOPATH` when locating the module cache
    pub gopath: Option<PathBuf>,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            file_patterns: Vec::new(),
            license_confidence_level: DEFAULT_LICENSE_CONFIDENCE_LEVEL,
            detection_priority: DetectionPriority::default(),
            gopath: None,
        }
    }
}

impl AnalysisRequest {
    pub fn new(file_patterns: Vec<String>, license_confidence_level: f64) -> Self {
        Self {
            file_patterns,
            license_confidence_level,
            ..Self::default()
        }
    }

    /// Builds a request from a loaded config file, falling back to defaults
    pub fn from_config(config: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            file_patterns: config.file_patterns.clone().unwrap_or_default(),
            license_confidence_level: config
                .license_confidence_level
                .unwrap_or(defaults.license_confidence_level),
            detection_priority: config.detection_priority.unwrap_or_default(),
            gopath: config.gopath.clone(),
        }
    }

    pub fn with_gopath(mut self, gopath: PathBuf) -> Self {
        self.gopath = Some(gopath);
        self
    }

    pub fn with_detection_priority(mut self, priority: DetectionPriority) -> Self {
        self.detection_priority = priority;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.license_confidence_level) {
            return Err(AnalysisError::Validation {
                message: format!(
                    "license confidence level must be between 0.0 and 1.0 (got {})",
                    self.license_confidence_level
                ),
            }
            .into());
        }
        Ok(())
    }
}
