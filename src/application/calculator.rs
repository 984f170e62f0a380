use crate::domain::fees::FeeSchedule;
use crate::domain::payout::{PayoutBreakdown, PayoutRequest};
use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;

/// Turns a gross USD payout into a local-currency net amount.
///
/// Order is fixed: withholding on the gross, processor fees on the
/// post-tax amount, conversion on the post-fee amount.
#[derive(Debug, Clone, Default)]
pub struct PayoutCalculator {
    schedule: FeeSchedule,
}

impl PayoutCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Runs the full pipeline for `request` at the given `fx_rate`.
    ///
    /// Fails when the schedule has no withholding rate for the destination,
    /// which validated requests never hit, or when a step leaves the
    /// `Decimal` range (an absurd rate or schedule).
    pub fn calculate(&self, request: &PayoutRequest, fx_rate: Decimal) -> Result<PayoutBreakdown> {
        let withholding_rate = self
            .schedule
            .withholding_rate(request.destination)
            .ok_or_else(|| PayoutError::UnsupportedCurrency {
                code: request.destination.to_string(),
                supported: self.schedule.supported_list(),
            })?;

        let gross = request.gross.value();
        let withheld_tax = checked(gross.checked_mul(withholding_rate))?;
        let after_tax = checked(gross.checked_sub(withheld_tax))?;

        let fixed_fee = self.schedule.fixed_fee;
        let border_fee = checked(after_tax.checked_mul(self.schedule.border_rate))?;
        let after_fees = checked(
            after_tax
                .checked_sub(fixed_fee)
                .and_then(|v| v.checked_sub(border_fee)),
        )?;

        let local_amount = checked(after_fees.checked_mul(fx_rate))?;

        Ok(PayoutBreakdown {
            destination: request.destination,
            gross,
            withholding_rate,
            withheld_tax,
            after_tax,
            fixed_fee,
            border_rate: self.schedule.border_rate,
            border_fee,
            after_fees,
            fx_rate,
            local_amount,
        })
    }
}

fn checked(value: Option<Decimal>) -> Result<Decimal> {
    value.ok_or(PayoutError::Overflow)
}
