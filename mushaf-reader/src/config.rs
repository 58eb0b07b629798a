//! mushaf-reader configuration
//!
//! Each setting resolves as: command line > environment > TOML > compiled
//! default (see `mushaf_common::config`).

use crate::error::Result;
use crate::playback::TrackErrorPolicy;
use crate::quran_api::ClientConfig;
use mushaf_common::config::{load_or_default, resolve_value, CompiledDefaults, TomlConfig};
use std::path::Path;
use std::time::Duration;

pub const ENV_PORT: &str = "MUSHAF_PORT";
pub const ENV_API_BASE_URL: &str = "MUSHAF_API_BASE_URL";
pub const ENV_TRANSLATION_EDITION: &str = "MUSHAF_TRANSLATION_EDITION";
pub const ENV_AUDIO_EDITION: &str = "MUSHAF_AUDIO_EDITION";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MUSHAF_REQUEST_TIMEOUT_SECS";
pub const ENV_TRACK_ERROR_POLICY: &str = "MUSHAF_TRACK_ERROR_POLICY";
pub const ENV_MAX_TRACK_ATTEMPTS: &str = "MUSHAF_MAX_TRACK_ATTEMPTS";

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub api_base_url: Option<String>,
    pub translation_edition: Option<String>,
    pub audio_edition: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub track_error_policy: Option<String>,
    pub max_track_attempts: Option<u32>,
}

/// Fully resolved reader configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api: ClientConfig,
    pub track_error_policy: TrackErrorPolicy,
    pub log_level: String,
}

impl Config {
    /// Read the config file (if any) and resolve every setting
    pub fn load(cli: &CliOverrides, config_path: Option<&Path>) -> Result<Self> {
        let toml = load_or_default(config_path)?;
        Self::resolve(cli, &toml)
    }

    pub fn resolve(cli: &CliOverrides, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::default();

        let port = resolve_value(cli.port, ENV_PORT, toml.port, defaults.port);
        let base_url = resolve_value(
            cli.api_base_url.clone(),
            ENV_API_BASE_URL,
            toml.api_base_url.clone(),
            defaults.api_base_url,
        );
        let translation_edition = resolve_value(
            cli.translation_edition.clone(),
            ENV_TRANSLATION_EDITION,
            toml.translation_edition.clone(),
            defaults.translation_edition,
        );
        let audio_edition = resolve_value(
            cli.audio_edition.clone(),
            ENV_AUDIO_EDITION,
            toml.audio_edition.clone(),
            defaults.audio_edition,
        );
        let timeout_secs = resolve_value(
            cli.request_timeout_secs,
            ENV_REQUEST_TIMEOUT_SECS,
            toml.request_timeout_secs,
            defaults.request_timeout_secs,
        );
        let policy_name = resolve_value(
            cli.track_error_policy.clone(),
            ENV_TRACK_ERROR_POLICY,
            toml.track_error_policy.clone(),
            defaults.track_error_policy,
        );
        let max_attempts = resolve_value(
            cli.max_track_attempts,
            ENV_MAX_TRACK_ATTEMPTS,
            toml.max_track_attempts,
            defaults.max_track_attempts,
        );

        Ok(Self {
            port,
            api: ClientConfig {
                base_url,
                translation_edition,
                audio_edition,
                // 0 disables the timeout
                timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            },
            track_error_policy: TrackErrorPolicy::from_config(&policy_name, max_attempts)?,
            log_level: toml.logging.level.clone(),
        })
    }
}
