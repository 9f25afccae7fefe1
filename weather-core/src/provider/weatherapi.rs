use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    WeatherError,
    model::{AstronomyResponse, CurrentResponse, WeatherRequest, WeatherSnapshot},
};

use super::WeatherProvider;

/// Client for <https://www.weatherapi.com>.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    /// `base_url` is the API root, e.g. `https://api.weatherapi.com/v1`.
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|err| {
            WeatherError::Configuration(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<CurrentResponse, WeatherError> {
        self.fetch_json(
            "current",
            "current.json",
            &[("q", request.location.as_str()), ("aqi", "yes")],
        )
        .await
    }

    async fn fetch_astronomy(
        &self,
        request: &WeatherRequest,
    ) -> Result<AstronomyResponse, WeatherError> {
        let date = request.date.format("%Y-%m-%d").to_string();
        self.fetch_json(
            "astronomy",
            "astronomy.json",
            &[("q", request.location.as_str()), ("dt", date.as_str())],
        )
        .await
    }

    #[instrument(level = "debug", skip(self, params))]
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?params, "sending request");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|source| WeatherError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::Transport { endpoint, source })?;
        debug!(%status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(WeatherError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::Decode { endpoint, source })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn get_snapshot(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, WeatherError> {
        let (current, astronomy) =
            tokio::try_join!(self.fetch_current(request), self.fetch_astronomy(request))?;

        Ok(WeatherSnapshot::merge(current, astronomy))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
