//! Process configuration for the linka bot.
//!
//! Reads the feed URL and the four OAuth secrets from the environment
//! (optionally seeded from a `.env` file) and translates them into a
//! `linka_core::BotConfig`. Core never reads the environment itself.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use linka_api::Credentials;
use linka_api::twitter::DEFAULT_API_URL;
use linka_core::BotConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to read .env file: {0}")]
    Dotenv(String),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Raw settings as found in the environment.
///
/// Credentials default to empty strings: a missing secret fails at
/// authentication time, not at startup.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Sensor feed endpoint (`API_URL`).
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub consumer_key: String,

    #[serde(default)]
    pub consumer_secret: String,

    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub access_token_secret: String,

    /// Twitter REST base URL (`LINKA_TWITTER_API_URL`).
    #[serde(default = "default_twitter_api_url")]
    pub twitter_api_url: String,

    /// Request timeout in seconds (`LINKA_TIMEOUT`).
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            access_token_secret: String::new(),
            twitter_api_url: default_twitter_api_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_twitter_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_timeout() -> u64 {
    30
}

/// Variables taken verbatim. `Env` would parse `0012345` as a number and
/// drop the leading zeros, which breaks a secret.
const VERBATIM_KEYS: [&str; 5] = [
    "api_url",
    "consumer_key",
    "consumer_secret",
    "access_token",
    "access_token_secret",
];

fn verbatim_env() -> BTreeMap<String, String> {
    Env::raw()
        .only(&VERBATIM_KEYS)
        .iter()
        .map(|(key, value)| (key.as_str().to_owned(), value))
        .collect()
}

// ── Loading ─────────────────────────────────────────────────────────

/// Seed the process environment from a `.env` file, if there is one.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Dotenv(e.to_string())),
    }
}

/// The figment the settings are extracted from.
pub fn figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(verbatim_env()))
        .merge(Env::prefixed("LINKA_").only(&["twitter_api_url", "timeout"]))
}

/// Load settings from the environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    Ok(figment().extract()?)
}

/// Load settings and translate them into a `BotConfig`.
pub fn load_bot_config() -> Result<BotConfig, ConfigError> {
    let settings = load_settings()?;
    to_bot_config(&settings)
}

// ── Translation ─────────────────────────────────────────────────────

/// Validate settings and build the runtime configuration.
pub fn to_bot_config(settings: &Settings) -> Result<BotConfig, ConfigError> {
    let feed_url = parse_url("API_URL", settings.api_url.as_deref().unwrap_or_default())?;
    let twitter_api_url = parse_url("LINKA_TWITTER_API_URL", &settings.twitter_api_url)?;

    if settings.timeout == 0 {
        return Err(ConfigError::Validation {
            field: "LINKA_TIMEOUT".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(BotConfig {
        feed_url,
        twitter_api_url,
        credentials: Credentials::new(
            settings.consumer_key.clone(),
            settings.consumer_secret.clone(),
            settings.access_token.clone(),
            settings.access_token_secret.clone(),
        ),
        timeout: Duration::from_secs(settings.timeout),
    })
}

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: "must be set".into(),
        });
    }
    Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not a valid URL: {e}"),
    })
}
