use super::currency::CurrencyCode;
use crate::error::PayoutError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// A gross payout in USD, greater than zero and at most [`GrossAmount::MAX`].
///
/// Construction is the only validation point, so any `GrossAmount` in hand
/// is safe to feed into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GrossAmount(Decimal);

impl GrossAmount {
    /// One trillion USD.
    pub const MAX: Decimal = dec!(1000000000000);

    pub fn new(value: Decimal) -> Result<Self, PayoutError> {
        if value > Decimal::ZERO && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(PayoutError::InvalidAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for GrossAmount {
    type Error = PayoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GrossAmount> for Decimal {
    fn from(amount: GrossAmount) -> Self {
        amount.0
    }
}

impl FromStr for GrossAmount {
    type Err = PayoutError;

    /// Accepts plain (`1000`, `249.99`) and scientific (`1e3`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| PayoutError::InvalidAmount)?;
        Self::new(value)
    }
}

/// One payout to estimate: how much, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutRequest {
    pub gross: GrossAmount,
    pub destination: CurrencyCode,
}

impl PayoutRequest {
    pub fn new(gross: GrossAmount, destination: CurrencyCode) -> Self {
        Self { gross, destination }
    }
}

/// Every intermediate amount of a payout, in pipeline order.
///
/// All USD figures keep full precision; rounding happens only when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutBreakdown {
    pub destination: CurrencyCode,
    pub gross: Decimal,
    pub withholding_rate: Decimal,
    pub withheld_tax: Decimal,
    pub after_tax: Decimal,
    pub fixed_fee: Decimal,
    pub border_rate: Decimal,
    pub border_fee: Decimal,
    pub after_fees: Decimal,
    /// Destination units per USD.
    pub fx_rate: Decimal,
    pub local_amount: Decimal,
}
