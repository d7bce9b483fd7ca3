//! Configuration file support
//!
//! Settings are read from TOML. Every field has a default, so a file only
//! needs the keys it changes:
//!
//! ```toml
//! [registry]
//! quran_table = "/srv/tahfizh/mushaf-pages.json"
//! iqra_volume_pages = [31, 30, 30, 30, 30, 30]
//!
//! [calc]
//! lines_per_page = 15
//!
//! [format]
//! style = "compact"
//! placeholder = "-"
//! ```

use crate::calc::CalcOptions;
use crate::format::{FormatStyle, ResultFormatter, INVALID_PLACEHOLDER};
use crate::registry::{
    IqraTable, LocationRegistry, RegistryError, DEFAULT_IQRA_VOLUME_PAGES,
    DEFAULT_SUGGESTION_THRESHOLD, IQRA_VOLUME_COUNT, LINES_PER_PAGE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "tahfizh.toml";

/// Directory under the user config dir
pub const CONFIG_DIR_NAME: &str = "tahfizh-range";

/// Config errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    #[error("Failed to build registry: {0}")]
    RegistryError(#[from] RegistryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Location registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// JSON location table replacing the built-in sample pages
    pub quran_table: Option<PathBuf>,
    /// Page count of each Iqra volume
    pub iqra_volume_pages: [u32; IQRA_VOLUME_COUNT],
    /// Similarity required before suggesting a surah name
    pub suggestion_threshold: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            quran_table: None,
            iqra_volume_pages: DEFAULT_IQRA_VOLUME_PAGES,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub lines_per_page: u32,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            lines_per_page: LINES_PER_PAGE,
        }
    }
}

/// Formatter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub style: FormatStyle,
    pub placeholder: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: FormatStyle::default(),
            placeholder: INVALID_PLACEHOLDER.to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub calc: CalcConfig,
    pub format: FormatConfig,
}

impl Config {
    /// Candidate config files, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR_NAME).join("config.toml"));
        }
        paths
    }

    /// Load the first config file found, or defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a specific config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.calc.lines_per_page == 0 {
            return Err(ConfigError::InvalidValue(
                "calc.lines_per_page must be greater than 0".to_string(),
            ));
        }
        if self.registry.iqra_volume_pages.contains(&0) {
            return Err(ConfigError::InvalidValue(
                "registry.iqra_volume_pages entries must be greater than 0".to_string(),
            ));
        }
        if IqraTable::new(self.registry.iqra_volume_pages)
            .total_pages()
            .is_none()
        {
            return Err(ConfigError::InvalidValue(format!(
                "registry.iqra_volume_pages total must fit in {} pages",
                u32::MAX
            )));
        }
        if !(0.0..=1.0).contains(&self.registry.suggestion_threshold) {
            return Err(ConfigError::InvalidValue(format!(
                "registry.suggestion_threshold must be within 0-1, got {}",
                self.registry.suggestion_threshold
            )));
        }
        Ok(())
    }

    /// Effective configuration as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Calculator options
    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions::builder()
            .lines_per_page(self.calc.lines_per_page)
            .build()
    }

    /// Result formatter
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.format.style).with_placeholder(self.format.placeholder.as_str())
    }

    /// Build the location registry these settings describe
    pub fn build_registry(&self) -> Result<LocationRegistry> {
        let registry = match &self.registry.quran_table {
            Some(path) => LocationRegistry::load_table(path)?,
            None => LocationRegistry::builtin(),
        };
        Ok(registry
            .with_iqra_volume_pages(self.registry.iqra_volume_pages)
            .with_suggestion_threshold(self.registry.suggestion_threshold))
    }
}
