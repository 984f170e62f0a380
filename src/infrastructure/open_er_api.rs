use crate::domain::currency::CurrencyCode;
use crate::domain::ports::RateProvider;
use crate::error::{PayoutError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of the `latest/USD` endpoint. Only `rates` is required.
#[derive(Debug, Deserialize)]
pub struct LatestRates {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    pub rates: HashMap<String, serde_json::Number>,
}

impl LatestRates {
    /// Picks the rate for `currency` out of the table.
    ///
    /// Entries are converted lazily so one odd value elsewhere in the
    /// table cannot spoil the lookup.
    pub fn rate_for(&self, currency: CurrencyCode) -> std::result::Result<Decimal, String> {
        if let Some(result) = &self.result
            && result != "success"
        {
            return Err(format!("provider reported result {result:?}"));
        }
        if let Some(base) = &self.base_code
            && base != CurrencyCode::Usd.as_str()
        {
            return Err(format!("unexpected base currency {base}"));
        }

        let raw = self
            .rates
            .get(currency.as_str())
            .ok_or_else(|| format!("rate not found for {currency}"))?
            .to_string();
        let rate = Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(|e| format!("unreadable rate {raw}: {e}"))?;

        if rate <= Decimal::ZERO {
            return Err(format!("non-positive rate {rate} for {currency}"));
        }
        Ok(rate)
    }
}

/// Live USD rates from open.er-api.com.
///
/// Issues one GET per lookup; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct OpenErApiRateProvider {
    client: reqwest::Client,
    url: String,
}

impl OpenErApiRateProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PayoutError::rate_fetch)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn latest(&self) -> std::result::Result<LatestRates, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl RateProvider for OpenErApiRateProvider {
    async fn usd_rate(&self, currency: CurrencyCode) -> Result<Decimal> {
        debug!(url = %self.url, %currency, "fetching exchange rates");
        let outcome = match self.latest().await {
            Ok(table) => table.rate_for(currency),
            Err(e) => Err(e.to_string()),
        };
        outcome.map_err(|cause| {
            debug!(%currency, %cause, "exchange rate lookup failed");
            PayoutError::RateFetchFailed(cause)
        })
    }
}
