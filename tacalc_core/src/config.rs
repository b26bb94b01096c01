//! # Configuration
//!
//! Optional `tacalc.toml` settings. Every field has a default, so an empty
//! file (or none at all) is a valid configuration.
//!
//! ```toml
//! language = "de"
//! data_file = "/srv/tacalc/user_inputs.json"
//! report_dir = "reports"
//! log_level = "info"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::i18n::Language;
use crate::store::DEFAULT_FILE_NAME;

/// Name of the configuration file in the platform config directory
pub const CONFIG_FILE_NAME: &str = "tacalc.toml";

/// Directory created under the platform config and data directories
pub const APP_DIR_NAME: &str = "tacalc";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Display language
    pub language: Language,

    /// Input record location; platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Where exported reports go; working directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,

    /// Default log filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            language: Language::default(),
            data_file: None,
            report_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/tacalc/tacalc.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file there yields the defaults.
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::FileError)` - The file could not be read
    /// * `Err(CalcError::SerializationError)` - The file is not valid config TOML
    pub fn load(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) => match Self::load_file(&path) {
                    Err(CalcError::FileError { reason, .. }) if reason == NOT_FOUND => {
                        debug!(path = %path.display(), "no config file, using defaults");
                        Ok(AppConfig::default())
                    }
                    other => other,
                },
                None => Ok(AppConfig::default()),
            },
        }
    }

    fn load_file(path: &Path) -> CalcResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let reason = if e.kind() == ErrorKind::NotFound {
                NOT_FOUND.to_string()
            } else {
                e.to_string()
            };
            CalcError::file_error("read", path.display().to_string(), reason)
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        toml::from_str(content).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Serialize settings as TOML text.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CalcError::file_error("create_dir", parent.display().to_string(), e.to_string())
            })?;
        }
        fs::write(path, content)
            .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))
    }

    /// Effective input record path.
    pub fn data_file_path(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME)),
        }
    }

    /// Effective report output directory.
    pub fn report_dir_path(&self) -> PathBuf {
        self.report_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

const NOT_FOUND: &str = "not found";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, Language::En);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.report_dir_path(), PathBuf::from("."));
        assert!(config.data_file_path().ends_with(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_parse_all_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            language = "lb"
            data_file = "/tmp/inputs.json"
            report_dir = "out"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.language, Language::Lb);
        assert_eq!(config.data_file_path(), PathBuf::from("/tmp/inputs.json"));
        assert_eq!(config.report_dir_path(), PathBuf::from("out"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = AppConfig::from_toml_str("language = \"es\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = AppConfig::from_toml_str("langauge = \"de\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        assert!(AppConfig::from_toml_str("language = ").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = AppConfig {
            language: Language::Fr,
            report_dir: Some(PathBuf::from("reports")),
            ..AppConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
