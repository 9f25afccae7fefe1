use thiserror::Error;

/// The two ways a weather run can fail. Both are fatal for the CLI.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Credential file missing, key absent, or config file unusable.
    #[error("{0}")]
    Configuration(String),

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Failed to send request to WeatherAPI.com ({endpoint}): {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("WeatherAPI {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The API answered 2xx but the payload did not match the expected shape.
    #[error("Failed to parse WeatherAPI {endpoint} JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    /// True for every failure that happened while talking to the API.
    pub fn is_data_fetch(&self) -> bool {
        !matches!(self, WeatherError::Configuration(_))
    }
}
