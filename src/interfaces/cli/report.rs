use super::format;
use super::style::Palette;
use crate::domain::payout::PayoutBreakdown;
use std::io::{self, Write};

/// Renders a breakdown as the labeled, line-per-step report.
///
/// Purely presentational: amounts are rounded for display only and the
/// FX rate is shown to two places even though the conversion used the
/// full-precision rate.
pub fn render(breakdown: &PayoutBreakdown, palette: Palette) -> String {
    let code = breakdown.destination;
    let usd = |value| palette.usd(&format::usd(value));
    let local = palette.local(&format::local(breakdown.local_amount, code));
    let line = |label: &str, value: String| format!("{}: {value}\n", palette.label(label));

    let mut out = String::new();
    out.push('\n');
    out.push_str(&palette.title("💰 Detailed Payout Breakdown"));
    out.push('\n');
    out.push_str(&line("Gross (USD)", usd(breakdown.gross)));
    out.push_str(&line(
        &format!("Withholding ({}%)", format::percent(breakdown.withholding_rate)),
        format!("-{}", usd(breakdown.withheld_tax)),
    ));
    out.push_str(&line("After Tax", usd(breakdown.after_tax)));
    out.push('\n');

    out.push_str(&line(
        "Processor Fixed Fee",
        format!("-{}", usd(breakdown.fixed_fee)),
    ));
    out.push_str(&line(
        &format!("Cross-border Fee ({}%)", format::percent(breakdown.border_rate)),
        format!("-{}", usd(breakdown.border_fee)),
    ));
    out.push_str(&line("After Fees", usd(breakdown.after_fees)));
    out.push('\n');

    out.push_str(&line(
        &format!("FX Rate (1 USD → {code})"),
        format::two_places(breakdown.fx_rate),
    ));
    out.push_str(&line(&format!("Converted ({code})"), local.clone()));
    out.push('\n');
    out.push_str(&palette.summary("🎉 Final Payout ≈ "));
    out.push_str(&local);
    out.push('\n');
    out
}

/// Writes rendered reports to any `Write` sink (e.g. Stdout).
pub struct ReportWriter<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    pub fn write_breakdown(&mut self, breakdown: &PayoutBreakdown) -> io::Result<()> {
        self.writer
            .write_all(render(breakdown, self.palette).as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::calculator::PayoutCalculator;
    use crate::domain::currency::CurrencyCode;
    use crate::domain::payout::{GrossAmount, PayoutRequest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn breakdown(gross: Decimal, destination: CurrencyCode, rate: Decimal) -> PayoutBreakdown {
        let request = PayoutRequest::new(GrossAmount::new(gross).unwrap(), destination);
        PayoutCalculator::default().calculate(&request, rate).unwrap()
    }

    fn labeled(label: &str, value: &str) -> String {
        format!("{label:<30}: {value}")
    }

    #[test]
    fn test_render_usd_report() {
        let report = render(&breakdown(dec!(1000), CurrencyCode::Usd, Decimal::ONE), Palette::plain());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "".to_string(),
                "💰 Detailed Payout Breakdown".to_string(),
                labeled("Gross (USD)", "$1000.00"),
                labeled("Withholding (15%)", "-$150.00"),
                labeled("After Tax", "$850.00"),
                "".to_string(),
                labeled("Processor Fixed Fee", "-$2.25"),
                labeled("Cross-border Fee (0.25%)", "-$2.13"),
                labeled("After Fees", "$845.63"),
                "".to_string(),
                labeled("FX Rate (1 USD → USD)", "1.00"),
                labeled("Converted (USD)", "$845.63"),
                "".to_string(),
                "🎉 Final Payout ≈ $845.63".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_ngn_report() {
        let report = render(&breakdown(dec!(500), CurrencyCode::Ngn, dec!(1500)), Palette::plain());

        assert!(report.contains(&labeled("Withholding (30%)", "-$150.00")));
        assert!(report.contains(&labeled("After Fees", "$346.88")));
        assert!(report.contains(&labeled("FX Rate (1 USD → NGN)", "1500.00")));
        assert!(report.contains(&labeled("Converted (NGN)", "₦520,312.50")));
        assert!(report.ends_with("🎉 Final Payout ≈ ₦520,312.50\n"));
    }

    #[test]
    fn test_render_eur_report_uses_german_format() {
        let report = render(&breakdown(dec!(2000), CurrencyCode::Eur, dec!(0.9)), Palette::plain());
        // 2000 * 0.85 = 1700; 1700 * 0.9975 - 2.25 = 1693.5; * 0.9 = 1524.15
        assert!(report.contains(&labeled("Converted (EUR)", "1.524,15\u{a0}€")));
    }

    #[test]
    fn test_render_shows_rounded_rate_only() {
        let b = breakdown(dec!(100), CurrencyCode::Ngn, dec!(1532.756789));
        let report = render(&b, Palette::plain());
        assert!(report.contains(&labeled("FX Rate (1 USD → NGN)", "1532.76")));
        assert_eq!(b.local_amount, b.after_fees * dec!(1532.756789));
    }

    #[test]
    fn test_render_does_not_touch_breakdown() {
        let b = breakdown(dec!(123.456), CurrencyCode::Eur, dec!(0.91));
        let before = b.clone();
        let _ = render(&b, Palette::new(true));
        assert_eq!(b, before);
    }

    #[test]
    fn test_writer_flushes_report() {
        let mut buf = Vec::new();
        ReportWriter::new(&mut buf, Palette::plain())
            .write_breakdown(&breakdown(dec!(1000), CurrencyCode::Usd, Decimal::ONE))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Final Payout ≈ $845.63"));
    }
}
