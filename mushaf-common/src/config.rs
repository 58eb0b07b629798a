//! Configuration loading and config file resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority, includes clap `env` fallbacks)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is never fatal: the service logs a warning and starts
//! with compiled defaults. A TOML file that exists but cannot be parsed is a
//! configuration error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MUSHAF_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "mushaf-reader.toml";

/// Default public Quran API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Default translation edition (Pickthall English)
pub const DEFAULT_TRANSLATION_EDITION: &str = "en.pickthall";

/// Default recitation edition (Mishary Alafasy)
pub const DEFAULT_AUDIO_EDITION: &str = "ar.alafasy";

/// Filter used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "mushaf_reader=info,mushaf_common=info,tower_http=info";

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Contents of `mushaf-reader.toml`
///
/// Every field is optional; absent fields fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub api_base_url: Option<String>,
    pub translation_edition: Option<String>,
    pub audio_edition: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// `"skip"` or `"retry"`
    pub track_error_policy: Option<String>,
    pub max_track_attempts: Option<u32>,
    pub logging: LoggingConfig,
}

/// Compiled fallback values used when no other source provides a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub port: u16,
    pub api_base_url: String,
    pub translation_edition: String,
    pub audio_edition: String,
    pub request_timeout_secs: u64,
    pub track_error_policy: String,
    pub max_track_attempts: u32,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            port: 5780,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            translation_edition: DEFAULT_TRANSLATION_EDITION.to_string(),
            audio_edition: DEFAULT_AUDIO_EDITION.to_string(),
            request_timeout_secs: 30,
            track_error_policy: "retry".to_string(),
            max_track_attempts: 2,
        }
    }
}

/// Platform config file location (`~/.config/mushaf/mushaf-reader.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mushaf").join(CONFIG_FILE_NAME))
}

/// Pick the config file path
///
/// Priority: explicit argument, then `MUSHAF_CONFIG`, then the platform default.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path()
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Load the config file if present, otherwise fall back to defaults
///
/// Missing file (or no resolvable path) yields `TomlConfig::default()` with a
/// warning; a present but malformed file is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = path else {
        warn!("No config directory available, using compiled defaults");
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        warn!(
            "Config file not found at {}, using compiled defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    debug!("Loading config from {}", path.display());
    load_toml_config(path)
}

/// Resolve a single setting across all four tiers
///
/// An environment value that fails to parse is ignored with a warning.
pub fn resolve_value<T>(cli: Option<T>, env_var: &str, toml: Option<T>, default: T) -> T
where
    T: std::str::FromStr,
{
    if let Some(value) = cli {
        return value;
    }

    if let Ok(raw) = std::env::var(env_var) {
        match raw.parse::<T>() {
            Ok(value) => return value,
            Err(_) => warn!("Ignoring unparseable value for {}: {:?}", env_var, raw),
        }
    }

    toml.unwrap_or(default)
}
