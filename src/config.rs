//! Configuration file handling for charset-builder.
//!
//! Loads configuration from `~/.config/charset-builder/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::DEFAULT_OUTPUT_PATH;
use crate::unicode::COMMON_BLOCK_IDS;

/// Configuration file structure for charset-builder.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub charset: CharsetConfig,
    #[serde(default)]
    pub blocks: BlocksConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CharsetConfig {
    /// Pre-filled answer for the size prompt
    pub default_count: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BlocksConfig {
    /// Block ids offered before the full table
    #[serde(default = "default_common_blocks")]
    pub common: Vec<String>,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            common: default_common_blocks(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub default_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: default_output_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { key_hints: true }
    }
}

fn default_common_blocks() -> Vec<String> {
    COMMON_BLOCK_IDS.iter().map(|id| id.to_string()).collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&default_path())
    }

    /// Load configuration from `path`, or defaults if there is no file there.
    /// A file that exists but fails to read or parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("charset-builder")
        .join("config.toml")
}

/// Commented config file written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# charset-builder configuration

[charset]
# Pre-filled answer for "Number of characters in charset"
# default_count = 512

[blocks]
# Unicode blocks offered before "Choose a different Unicode block..."
# Ids are block names lowercased with punctuation and spaces removed.
common = [
    "latin1supplement",
    "latinextendeda",
    "latinextendedb",
    "cyrillic",
    "cyrillicsupplement",
    "currencysymbols",
    "arrows",
    "boxdrawing",
    "blockelements",
    "geometricshapes",
    "miscellaneoussymbols",
]

[output]
# Suggested destination file
default_path = "char.set"

[ui]
# Show key hints on the bottom line
key_hints = true
"#;
