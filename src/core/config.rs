//! # Configuration
//!
//! Settings with a simple override hierarchy: defaults → config file.
//!
//! The file lives at `~/.lectio/config.toml` and is optional. It is only ever
//! read; a missing file means defaults. Every field is optional.
//!
//! ```toml
//! [lookup]
//! base_url = "https://bible-api.com"
//! translation = "kjv"
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/lectio.log"
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::lookup::bible_api::{DEFAULT_BASE_URL, DEFAULT_TRANSLATION};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LectioConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LookupConfig {
    pub base_url: Option<String>,
    pub translation: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub translation: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE_NAME: &str = "lectio.log";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Where the loaded config came from.
///
/// Loading happens before the logger exists, so the caller reports this once
/// logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; defaults apply.
    Missing(PathBuf),
    NoHomeDir,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "No config file at {}, using defaults", path.display())
            }
            ConfigSource::NoHomeDir => {
                write!(f, "Could not determine home directory, using default config")
            }
        }
    }
}

/// Returns the path to `~/.lectio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectio").join("config.toml"))
}

/// Load the config file if there is one.
pub fn load_config() -> Result<(LectioConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((LectioConfig::default(), ConfigSource::NoHomeDir)),
    }
}

/// Load config from `path`. A missing file yields the defaults; a malformed
/// one is a `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<(LectioConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        return Ok((
            LectioConfig::default(),
            ConfigSource::Missing(path.to_path_buf()),
        ));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LectioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the sparse config into concrete values.
pub fn resolve(config: &LectioConfig) -> ResolvedConfig {
    let base_url = config
        .lookup
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let translation = config
        .lookup
        .translation
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSLATION.to_string());

    let log_level = match config.logging.level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        base_url,
        translation,
        log_level,
        log_file,
    }
}
