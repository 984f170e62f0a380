use super::calculator::PayoutCalculator;
use crate::domain::currency::CurrencyCode;
use crate::domain::payout::{PayoutBreakdown, PayoutRequest};
use crate::domain::ports::RateProviderBox;
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::debug;

/// Produces payout breakdowns from requests.
///
/// `PayoutEngine` owns the rate source and the calculator. A quote
/// performs at most one rate lookup and no lookup at all for USD.
pub struct PayoutEngine {
    rates: RateProviderBox,
    calculator: PayoutCalculator,
}

impl PayoutEngine {
    /// Creates a new `PayoutEngine`.
    ///
    /// # Arguments
    ///
    /// * `rates` - Where non-USD exchange rates come from.
    /// * `calculator` - The fee pipeline, carrying its schedule.
    pub fn new(rates: RateProviderBox, calculator: PayoutCalculator) -> Self {
        Self { rates, calculator }
    }

    pub fn calculator(&self) -> &PayoutCalculator {
        &self.calculator
    }

    /// Resolves the USD rate for `destination`; USD is always 1.
    pub async fn fx_rate(&self, destination: CurrencyCode) -> Result<Decimal> {
        if destination == CurrencyCode::Usd {
            return Ok(Decimal::ONE);
        }
        let rate = self.rates.usd_rate(destination).await?;
        debug!(%destination, %rate, "resolved exchange rate");
        Ok(rate)
    }

    /// Looks up the rate and runs the calculator.
    ///
    /// A failed lookup aborts before anything is computed.
    pub async fn quote(&self, request: &PayoutRequest) -> Result<PayoutBreakdown> {
        let fx_rate = self.fx_rate(request.destination).await?;
        self.calculator.calculate(request, fx_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payout::GrossAmount;
    use crate::error::PayoutError;
    use crate::infrastructure::fixed::FixedRateProvider;
    use rust_decimal_macros::dec;

    fn engine(provider: FixedRateProvider) -> PayoutEngine {
        PayoutEngine::new(Box::new(provider), PayoutCalculator::default())
    }

    #[tokio::test]
    async fn test_usd_quote_skips_rate_lookup() {
        let provider = FixedRateProvider::new([]);
        let lookups = provider.lookups();
        let engine = engine(provider);

        let request = PayoutRequest::new(GrossAmount::new(dec!(1000)).unwrap(), CurrencyCode::Usd);
        let breakdown = engine.quote(&request).await.unwrap();

        assert_eq!(breakdown.fx_rate, Decimal::ONE);
        assert_eq!(breakdown.local_amount, dec!(845.625));
        assert_eq!(lookups.count(), 0);
    }

    #[tokio::test]
    async fn test_ngn_quote_uses_provider_rate() {
        let provider = FixedRateProvider::new([(CurrencyCode::Ngn, dec!(1500))]);
        let lookups = provider.lookups();
        let engine = engine(provider);

        let request = PayoutRequest::new(GrossAmount::new(dec!(500)).unwrap(), CurrencyCode::Ngn);
        let breakdown = engine.quote(&request).await.unwrap();

        assert_eq!(breakdown.fx_rate, dec!(1500));
        assert_eq!(breakdown.local_amount, dec!(520312.5));
        assert_eq!(lookups.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_rate_aborts_quote() {
        let engine = engine(FixedRateProvider::new([(CurrencyCode::Ngn, dec!(1500))]));

        let request = PayoutRequest::new(GrossAmount::new(dec!(500)).unwrap(), CurrencyCode::Eur);
        let result = engine.quote(&request).await;

        assert!(matches!(result, Err(PayoutError::RateFetchFailed(_))));
    }
}
