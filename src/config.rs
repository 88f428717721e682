//! Runtime configuration, loaded from TOML or filled with defaults.

use crate::continent::Continent;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_ROW_SUM_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// CSV file with a `Country` column and one column per MBTI type.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Single-byte field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Country shown when none is requested.
    #[serde(default = "default_country")]
    pub default_country: String,

    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Allowed distance of a row's proportion sum from 1.0.
    #[serde(default = "default_row_sum_tolerance")]
    pub row_sum_tolerance: f64,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extra or replacement country -> continent entries.
    #[serde(default)]
    pub continents: HashMap<String, Continent>,
}

fn default_data_path() -> String {
    "countriesMBTI_16types.csv".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_country() -> String {
    "Korea, South".to_string()
}

fn default_preview_rows() -> usize {
    5
}

fn default_row_sum_tolerance() -> f64 {
    DEFAULT_ROW_SUM_TOLERANCE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: default_data_path(),
            delimiter: default_delimiter(),
            top_k: default_top_k(),
            default_country: default_country(),
            preview_rows: default_preview_rows(),
            row_sum_tolerance: default_row_sum_tolerance(),
            log_level: default_log_level(),
            continents: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Like [`AppConfig::load`], but a missing file gives `Ok(None)`. Any
    /// other read failure, and any parse or validation failure, is an error.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Config(format!("cannot read {}: {}", path.display(), e))),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".to_string()));
        }
        if self.row_sum_tolerance.is_nan() || self.row_sum_tolerance < 0.0 {
            return Err(Error::Config(
                "row_sum_tolerance must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| Error::Config(format!("delimiter {:?} is not ASCII", self.delimiter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.default_country, "Korea, South");
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn continent_overrides_and_values() {
        let config = AppConfig::from_toml_str(
            r#"
            data_path = "data/mbti.csv"
            delimiter = ";"
            top_k = 5

            [continents]
            "Iceland" = "Europe"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_path, "data/mbti.csv");
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.top_k, 5);
        assert_eq!(config.continents.get("Iceland"), Some(&Continent::Europe));
    }

    #[test]
    fn optional_config_is_none_only_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("mbtiframes.toml");
        assert!(matches!(AppConfig::load_optional(&missing), Ok(None)));

        let malformed = dir.path().join("malformed.toml");
        fs::write(&malformed, "[continents]\n\"Iceland\" = \"Europ\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_optional(&malformed),
            Err(Error::Config(_))
        ));

        let valid = dir.path().join("valid.toml");
        fs::write(&valid, "top_k = 3\n").unwrap();
        let config = AppConfig::load_optional(&valid).unwrap().unwrap();
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(
            AppConfig::from_toml_str("top_k = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("delimiter = \"é\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[continents]\nAtlantis = \"Mu\""),
            Err(Error::Config(_))
        ));
    }
}
