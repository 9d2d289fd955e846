//! Catalog configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::telemetry::TracingConfig;

/// Configuration for assembling the calibration catalog.
///
/// ```toml
/// enforce_referential_integrity = true
///
/// [tracing]
/// log_level = "debug"
/// json_format = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Reject catalogs whose profiles reference unknown family codes.
    /// Off by default: mismatches are logged and tolerated.
    pub enforce_referential_integrity: bool,

    pub tracing: TracingConfig,
}

impl CatalogConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file, or no path at all, yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "Loaded catalog configuration");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CatalogError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_permissive() {
        let config = CatalogConfig::default();
        assert!(!config.enforce_referential_integrity);
        assert_eq!(config.tracing.log_level, "info");
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(CatalogConfig::load(None).unwrap(), CatalogConfig::default());
    }

    #[test]
    fn load_missing_file_is_default() {
        let config =
            CatalogConfig::load(Some(Path::new("/nonexistent/path/catalog.toml"))).unwrap();
        assert!(!config.enforce_referential_integrity);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "enforce_referential_integrity = true\n\n\
             [tracing]\nlog_level = \"debug\"\njson_format = true"
        )
        .unwrap();

        let config = CatalogConfig::load(Some(file.path())).unwrap();
        assert!(config.enforce_referential_integrity);
        assert_eq!(config.tracing.log_level, "debug");
        assert!(config.tracing.json_format);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("enforce_referential_integrity = true").unwrap();
        assert!(config.enforce_referential_integrity);
        assert_eq!(config.tracing, TracingConfig::default());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err =
            CatalogConfig::from_toml_str("enforce_referential_integrity = \"yes\"").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
