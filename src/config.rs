//! Configuration file support for gomod-inventory.
//!
//! Provides YAML-based configuration through `gomod-inventory.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::outbound::DetectionPriority;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "gomod-inventory.config.yml";

/// Default minimum confidence for a license finding to count
pub const DEFAULT_LICENSE_CONFIDENCE_LEVEL: f64 = 0.9;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Overrides `GOPATH` when locating the module cache
    pub gopath: Option<PathBuf>,
    pub license_confidence_level: Option<f64>,
    /// Extra manifest inclusion patterns (relative to the scan root)
    pub file_patterns: Option<Vec<String>>,
    pub detection_priority: Option<DetectionPriority>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(level) = config.license_confidence_level {
        if !(0.0..=1.0).contains(&level) {
            bail!(
                "Invalid config: license_confidence_level must be between 0.0 and 1.0 (got {}).\n\n\
                 💡 Hint: The classifier reports confidences as fractions, e.g. 0.9 for 90%.",
                level
            );
        }
    }

    if let Some(ref patterns) = config.file_patterns {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: file_patterns[{}] must not be empty.\n\n\
                     💡 Hint: Each pattern is a path relative to the scan root, e.g. \"tools/*.mod\".",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}
