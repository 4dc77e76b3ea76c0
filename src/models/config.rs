use pixel_groups::{AverageDivisor, EdgePolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "GROUPFILTER_CONFIG";

/// Defaults loaded from a YAML config file.
///
/// Every field is optional; command-line flags take precedence over
/// anything set here, and built-in defaults fill whatever is left.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Shadow mask threshold (0-255)
    #[serde(default)]
    pub shadow: Option<u8>,

    /// Highlight mask threshold (0-255)
    #[serde(default)]
    pub highlight: Option<u8>,

    /// Checkerbox filter defaults
    #[serde(default)]
    pub checkerbox: CheckerboxConfig,

    /// Re-compress output PNGs with oxipng
    #[serde(default)]
    pub optimize: Option<bool>,
}

/// Checkerbox section of the config file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckerboxConfig {
    /// Tile edge length in pixels
    #[serde(default)]
    pub size: Option<usize>,

    /// `group-size` or `image-width`
    #[serde(default)]
    pub divisor: Option<AverageDivisor>,

    /// `crop` or `partial`
    #[serde(default)]
    pub edges: Option<EdgePolicy>,
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document instead of yielding an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file.
    ///
    /// A file that was asked for explicitly must exist and parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` if given, else from [`CONFIG_ENV`], else defaults.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config file, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}
