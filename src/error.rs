use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayoutError>;

#[derive(Error, Diagnostic, Debug)]
pub enum PayoutError {
    #[error("Invalid USD amount.")]
    #[diagnostic(
        code(payout::invalid_amount),
        help("enter a positive number no greater than 1000000000000, such as 1000 or 249.99")
    )]
    InvalidAmount,

    #[error("Currency not supported: {code}")]
    #[diagnostic(code(payout::unsupported_currency))]
    UnsupportedCurrency {
        code: String,
        #[help]
        supported: String,
    },

    #[error("Payout too large to compute at this exchange rate.")]
    #[diagnostic(code(payout::overflow))]
    Overflow,

    #[error("Failed to fetch exchange rate.")]
    #[diagnostic(code(payout::rate_fetch_failed))]
    RateFetchFailed(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(payout::io))]
    Io(#[from] std::io::Error),
}

impl PayoutError {
    /// Wraps any lookup failure; the cause is kept for logging only.
    pub fn rate_fetch(cause: impl std::fmt::Display) -> Self {
        Self::RateFetchFailed(cause.to_string())
    }
}
