//! volband CLI binary.
//!
//! Estimates historical volatility for an equity and prints the projected
//! price range over a holding window.

mod logger;
mod output;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use output::OutputFormat;
use std::process;
use std::time::Duration as StdDuration;
use volband::{PriceField, ensure_covers, estimate};
use volband_data::config::{DEFAULT_LOOKBACK_YEARS, DEFAULT_WINDOW};
use volband_data::{EstimationConfig, YahooQuoteProvider};

#[derive(Debug, Parser)]
#[command(name = "volband")]
#[command(about = "Historical volatility and projected price range for an equity", long_about = None)]
#[command(version)]
struct Cli {
    /// Equity symbol
    equity: String,

    /// Sessions (not days) in volatility window
    #[arg(short, long, default_value_t = DEFAULT_WINDOW, value_parser = clap::value_parser!(u32).range(1..))]
    window: u32,

    /// Price field used for estimation
    #[arg(long, default_value_t = PriceField::AdjustedClose)]
    selection: PriceField,

    /// Lookback period in years
    #[arg(long, default_value_t = DEFAULT_LOOKBACK_YEARS)]
    years: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn config(&self) -> EstimationConfig {
        EstimationConfig {
            window: self.window,
            selection: self.selection,
            lookback_years: self.years,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = cli.equity.trim().to_uppercase();
    let config = cli.config();
    config.validate()?;

    let now = Utc::now();
    let (start, end) = config.fetch_range(now)?;
    tracing::info!(%symbol, ?config, %start, "starting estimation");

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?,
    );
    pb.enable_steady_tick(StdDuration::from_millis(100));
    pb.set_message(format!("Fetching quotes for {}...", symbol));

    let provider = YahooQuoteProvider::new()?;
    let series = match provider.fetch_price_series(&symbol, start, end).await {
        Ok(series) => {
            pb.finish_and_clear();
            series
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(format!("Failed to fetch quotes for {}: {}", symbol, e).into());
        }
    };

    if let Err(e) = ensure_covers(&series, start.date_naive()) {
        return Err(format!("insufficient data for equity '{}': {}", symbol, e).into());
    }

    let projection = estimate(&series, config.selection, config.window)?;
    println!(
        "{}",
        output::render(cli.format, &series, &config, &projection)?
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["volband", "aapl"]).unwrap();
        assert_eq!(cli.equity, "aapl");
        assert_eq!(cli.config(), EstimationConfig::default());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "volband",
            "MSFT",
            "-w",
            "5",
            "--selection",
            "close",
            "--years",
            "2",
            "--format",
            "json",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.window, 5);
        assert_eq!(config.selection, PriceField::Close);
        assert_eq!(config.lookback_years, 2.0);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_zero_window() {
        assert!(Cli::try_parse_from(["volband", "AAPL", "--window", "0"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_selection() {
        assert!(Cli::try_parse_from(["volband", "AAPL", "--selection", "volume"]).is_err());
    }

    #[test]
    fn test_requires_equity() {
        assert!(Cli::try_parse_from(["volband"]).is_err());
    }
}
