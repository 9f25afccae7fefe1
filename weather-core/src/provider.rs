use crate::{
    Config, WeatherError, WeatherRequest, WeatherSnapshot, provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions and today's astronomy for one location.
    ///
    /// Either both parts arrive or the call fails; there is no partial snapshot.
    async fn get_snapshot(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the WeatherAPI.com provider, resolving the API key from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.api_key()?;
    let provider = WeatherApiProvider::new(api_key, config.base_url.clone(), config.timeout())?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = Config {
            env_file: dir.path().join(".env"),
            api_key_name: "WEATHER_CLI_PROVIDER_TEST_UNSET".into(),
            ..Config::default()
        };

        let err = provider_from_config(&cfg).unwrap_err();
        assert!(matches!(err, WeatherError::Configuration(_)));
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn provider_from_config_works_when_key_present() {
        let dir = tempfile::tempdir().expect("temp dir");
        let env_file = dir.path().join(".env");
        fs::write(&env_file, "WEATHER_API_KEY=KEY\n").expect("write env file");

        let cfg = Config { env_file, ..Config::default() };

        assert!(provider_from_config(&cfg).is_ok());
    }
}
