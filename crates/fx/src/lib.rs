//! HTTP exchange rate provider.
//!
//! Talks to any API exposing `GET {base_url}/latest?base=XXX` with a body of
//! the shape `{ "rates": { "EUR": 0.9, ... } }` (Frankfurter, exchangerate.host
//! and compatible services).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use dropship_core::currency::{ProviderError, RateMap, RateProvider};
use dropship_shared::{AppError, AppResult, ExchangeRateConfig};

/// Body of a `/latest` response. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: Option<RateMap>,
}

/// Parses a `/latest` response body.
///
/// # Errors
///
/// [`ProviderError::Decode`] when the body is not JSON or a rate is not a
/// number, [`ProviderError::MissingRates`] when `rates` is absent or null.
pub fn parse_rates(body: &str) -> Result<RateMap, ProviderError> {
    let response: LatestResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    response.rates.ok_or(ProviderError::MissingRates)
}

/// Rate provider backed by a public HTTP rate API.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRateProvider {
    /// Creates a provider for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a provider from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ExchangeRateConfig) -> AppResult<Self> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// URL of the `/latest` endpoint.
    #[must_use]
    pub fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_rates(&self, base: &str) -> Result<RateMap, ProviderError> {
        let url = self.latest_url();
        debug!(url = %url, base = %base, "Requesting exchange rates");

        let response = self
            .client
            .get(&url)
            .query(&[("base", base)])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        parse_rates(&body)
    }
}
