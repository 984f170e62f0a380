use super::currency::CurrencyCode;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Source of USD-based exchange rates.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Destination units bought by one USD.
    async fn usd_rate(&self, currency: CurrencyCode) -> Result<Decimal>;
}

pub type RateProviderBox = Box<dyn RateProvider>;
