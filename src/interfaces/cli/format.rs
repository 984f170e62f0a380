use crate::domain::currency::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `$` followed by the value to two decimals, without digit grouping.
pub fn usd(value: Decimal) -> String {
    format!("${:.2}", round2(value))
}

/// A plain number to two decimals, used for the displayed FX rate.
pub fn two_places(value: Decimal) -> String {
    format!("{:.2}", round2(value))
}

/// A fraction shown as a percentage without trailing zeros: 0.15 -> "15".
pub fn percent(rate: Decimal) -> String {
    (rate * Decimal::ONE_HUNDRED).normalize().to_string()
}

/// Currency formatting in the locale tied to `currency`.
///
/// NGN follows en-NG (`₦1,234.50`), USD en-US (`$1,234.50`) and EUR
/// de-DE (`1.234,50 €`).
pub fn local(value: Decimal, currency: CurrencyCode) -> String {
    let locale = currency.locale();
    let rounded = round2(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let number = format!(
        "{}{}{}",
        group(whole, locale.group_separator),
        locale.decimal_separator,
        fraction
    );

    if locale.symbol_first {
        format!("{sign}{}{number}", locale.symbol)
    } else {
        format!("{sign}{number}\u{a0}{}", locale.symbol)
    }
}

fn group(whole: &str, separator: char) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
