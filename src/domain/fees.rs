use super::currency::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Tax and processor fee constants applied to every payout.
///
/// The schedule is plain data handed to the calculator, so tests can build
/// their own instead of relying on the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    withholding: BTreeMap<CurrencyCode, Decimal>,
    /// Flat processor fee in USD.
    pub fixed_fee: Decimal,
    /// Cross-border fee as a fraction of the post-tax amount.
    pub border_rate: Decimal,
}

impl FeeSchedule {
    pub fn new(
        withholding: impl IntoIterator<Item = (CurrencyCode, Decimal)>,
        fixed_fee: Decimal,
        border_rate: Decimal,
    ) -> Self {
        Self {
            withholding: withholding.into_iter().collect(),
            fixed_fee,
            border_rate,
        }
    }

    /// Withholding rate for `currency`, `None` when the schedule does not cover it.
    pub fn withholding_rate(&self, currency: CurrencyCode) -> Option<Decimal> {
        self.withholding.get(&currency).copied()
    }

    pub fn supports(&self, currency: CurrencyCode) -> bool {
        self.withholding.contains_key(&currency)
    }

    /// Currencies carrying a withholding rate, in display order.
    pub fn supported(&self) -> Vec<CurrencyCode> {
        CurrencyCode::ALL
            .into_iter()
            .filter(|c| self.supports(*c))
            .collect()
    }

    pub fn supported_list(&self) -> String {
        self.supported()
            .iter()
            .map(CurrencyCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::new(
            [
                (CurrencyCode::Ngn, dec!(0.30)),
                (CurrencyCode::Usd, dec!(0.15)),
                (CurrencyCode::Eur, dec!(0.15)),
            ],
            dec!(2.25),
            dec!(0.0025),
        )
    }
}
