use std::fmt;

/// Destination currencies a payout can be quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurrencyCode {
    Ngn,
    Usd,
    Eur,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Ngn, CurrencyCode::Usd, CurrencyCode::Eur];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Ngn => "NGN",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
        }
    }

    /// Looks up a code after trimming and uppercasing the input.
    ///
    /// Returns the normalized text alongside the result so callers can
    /// report exactly what was rejected.
    pub fn normalize(input: &str) -> (String, Option<Self>) {
        let code = input.trim().to_uppercase();
        let found = Self::ALL.into_iter().find(|c| c.as_str() == code);
        (code, found)
    }

    /// Number formatting rules of the locale each currency is shown in.
    pub fn locale(&self) -> LocaleFormat {
        match self {
            // en-NG
            CurrencyCode::Ngn => LocaleFormat {
                symbol: "₦",
                symbol_first: true,
                group_separator: ',',
                decimal_separator: '.',
            },
            // en-US
            CurrencyCode::Usd => LocaleFormat {
                symbol: "$",
                symbol_first: true,
                group_separator: ',',
                decimal_separator: '.',
            },
            // de-DE
            CurrencyCode::Eur => LocaleFormat {
                symbol: "€",
                symbol_first: false,
                group_separator: '.',
                decimal_separator: ',',
            },
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub symbol: &'static str,
    /// `true` for `$1.00`, `false` for `1,00 €` (separated by a no-break space).
    pub symbol_first: bool,
    pub group_separator: char,
    pub decimal_separator: char,
}
