use crate::domain::currency::CurrencyCode;
use crate::domain::ports::RateProvider;
use crate::error::{PayoutError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared count of lookups served by a [`FixedRateProvider`].
#[derive(Debug, Default, Clone)]
pub struct LookupCounter(Arc<AtomicUsize>);

impl LookupCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// An in-memory rate table.
///
/// Answers from a fixed map instead of the network, which makes it the
/// substitute of choice in tests. Unknown currencies fail the same way a
/// missing entry in a remote response would.
#[derive(Debug, Default, Clone)]
pub struct FixedRateProvider {
    rates: HashMap<CurrencyCode, Decimal>,
    lookups: LookupCounter,
}

impl FixedRateProvider {
    pub fn new(rates: impl IntoIterator<Item = (CurrencyCode, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
            lookups: LookupCounter::default(),
        }
    }

    /// Handle that keeps counting after the provider is boxed away.
    pub fn lookups(&self) -> LookupCounter {
        self.lookups.clone()
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn usd_rate(&self, currency: CurrencyCode) -> Result<Decimal> {
        self.lookups.0.fetch_add(1, Ordering::SeqCst);
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| PayoutError::rate_fetch(format!("no rate for {currency}")))
    }
}
