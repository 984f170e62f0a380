use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payout_estimator::application::calculator::PayoutCalculator;
use payout_estimator::application::engine::PayoutEngine;
use payout_estimator::domain::fees::FeeSchedule;
use payout_estimator::domain::ports::RateProviderBox;
use payout_estimator::infrastructure::open_er_api::{
    DEFAULT_RATES_URL, DEFAULT_TIMEOUT, OpenErApiRateProvider,
};
use payout_estimator::interfaces::cli::prompt::Prompter;
use payout_estimator::interfaces::cli::report::ReportWriter;
use payout_estimator::interfaces::cli::style::Palette;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Estimate take-home pay from a gross USD payout after withholding,
/// processor fees and currency conversion.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Endpoint returning USD-based rates as JSON
    #[arg(long, default_value = DEFAULT_RATES_URL)]
    rates_url: String,

    /// Seconds to wait for the exchange rate lookup
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics only; stdout is reserved for prompts and the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let rates: RateProviderBox = Box::new(OpenErApiRateProvider::new(
        cli.rates_url,
        Duration::from_secs(cli.timeout_secs),
    )?);
    let engine = PayoutEngine::new(rates, PayoutCalculator::new(FeeSchedule::default()));

    let palette = Palette::new(io::stdout().is_terminal());

    // Input streams are released before the lookup and the report.
    let request = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), palette);
        prompter.read_request(engine.calculator().schedule())?
    };

    let breakdown = engine.quote(&request).await?;

    let mut writer = ReportWriter::new(io::stdout().lock(), palette);
    writer.write_breakdown(&breakdown).into_diagnostic()?;

    Ok(())
}
