//! Configuration file support for sbom-baseline.
//!
//! Provides YAML-based configuration through `sbom-baseline.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags always win over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{ReportFormat, StandardKind};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-baseline.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub standard: Option<String>,
    pub format: Option<String>,
    pub show_record: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured standard, already validated at load time.
    pub fn standard_kind(&self) -> Option<StandardKind> {
        self.standard
            .as_deref()
            .and_then(|s| StandardKind::from_str(s).ok())
    }

    /// The configured report format, already validated at load time.
    pub fn report_format(&self) -> Option<ReportFormat> {
        self.format
            .as_deref()
            .and_then(|s| ReportFormat::from_str(s).ok())
    }
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
    if let Some(ref standard) = config.standard {
        if StandardKind::from_str(standard).is_err() {
            bail!(
                "Invalid config: unknown standard '{}'.\n\n💡 Hint: Use 'ntia' or 'fsct'.",
                standard
            );
        }
    }
    if let Some(ref format) = config.format {
        if ReportFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: unknown format '{}'.\n\n💡 Hint: Use 'text' or 'json'.",
                format
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
