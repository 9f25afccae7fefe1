use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

use crate::{credentials, error::WeatherError};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_API_KEY_NAME: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk. Every field is optional.
///
/// Example TOML:
/// ```toml
/// env_file = "/home/me/.config/weather/.env"
/// celsius = true
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// WeatherAPI.com base URL, without a trailing slash.
    pub base_url: String,

    /// `KEY=VALUE` file holding the API key.
    pub env_file: PathBuf,

    /// Name of the key to read from `env_file` (and from the environment).
    pub api_key_name: String,

    /// Show °C and kph instead of °F and mph.
    pub celsius: bool,

    /// HTTP timeout; when absent the client default applies.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            api_key_name: DEFAULT_API_KEY_NAME.to_string(),
            celsius: false,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self, WeatherError> {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no platform config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from an explicit path; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, WeatherError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|err| {
            WeatherError::Configuration(format!(
                "Failed to read config file {}: {err}",
                path.display()
            ))
        })?;

        toml::from_str(&contents).map_err(|err| {
            WeatherError::Configuration(format!(
                "Failed to parse config file {}: {err}",
                path.display()
            ))
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "weather-task", "weather-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resolve the API key: the env file first, then the process environment.
    /// Empty values count as absent in both places.
    pub fn api_key(&self) -> Result<String, WeatherError> {
        self.resolve_api_key(|name| env::var(name).ok())
    }

    fn resolve_api_key(
        &self,
        from_env: impl FnOnce(&str) -> Option<String>,
    ) -> Result<String, WeatherError> {
        credentials::lookup(&self.env_file, &self.api_key_name)
            .filter(|key| !key.is_empty())
            .or_else(|| from_env(&self.api_key_name).filter(|key| !key.is_empty()))
            .ok_or_else(|| {
                WeatherError::Configuration(format!(
                    "API key is required. Provide it in {} or set {} environment variable.",
                    self.env_file.display(),
                    self.api_key_name
                ))
            })
    }
}
