use super::style::Palette;
use crate::domain::currency::CurrencyCode;
use crate::domain::fees::FeeSchedule;
use crate::domain::payout::{GrossAmount, PayoutRequest};
use crate::error::{PayoutError, Result};
use std::io::{BufRead, Write};

/// Asks for the payout inputs over a line-oriented stream.
///
/// Generic over the streams so it runs against Stdin/Stdout in the binary
/// and against in-memory buffers in tests. Dropping the prompter releases
/// both streams.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    /// Writes `question` and reads one line. End of input reads as empty.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", self.palette.prompt(question))?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    pub fn read_gross_amount(&mut self) -> Result<GrossAmount> {
        self.ask("Enter payout amount (USD): ")?.parse()
    }

    /// Reads a currency code, accepted only if `schedule` supports it.
    pub fn read_destination_currency(&mut self, schedule: &FeeSchedule) -> Result<CurrencyCode> {
        let supported = schedule.supported_list();
        let answer = self.ask(&format!("Enter destination currency ({supported}): "))?;

        match CurrencyCode::normalize(&answer) {
            (_, Some(currency)) if schedule.supports(currency) => Ok(currency),
            (code, _) => Err(PayoutError::UnsupportedCurrency { code, supported }),
        }
    }

    /// Reads the amount first; an invalid amount stops before the currency
    /// question is asked.
    pub fn read_request(&mut self, schedule: &FeeSchedule) -> Result<PayoutRequest> {
        let gross = self.read_gross_amount()?;
        let destination = self.read_destination_currency(schedule)?;
        Ok(PayoutRequest::new(gross, destination))
    }
}
